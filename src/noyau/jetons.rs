// src/noyau/jetons.rs

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Précédence + associativité d’un opérateur binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorSpec {
    pub precedence: u8,
    pub associativite: Associativite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

const GAUCHE_2: OperatorSpec = OperatorSpec {
    precedence: 2,
    associativite: Associativite::Gauche,
};

const GAUCHE_3: OperatorSpec = OperatorSpec {
    precedence: 3,
    associativite: Associativite::Gauche,
};

/// Le moins unaire sur la pile : au-dessus de tout opérateur binaire, préfixe.
pub const NEG_SPEC: OperatorSpec = OperatorSpec {
    precedence: 4,
    associativite: Associativite::Droite,
};

impl Operateur {
    /// Table fixe des opérateurs (constante, jamais modifiée).
    pub const fn spec(self) -> OperatorSpec {
        match self {
            Operateur::Plus | Operateur::Minus => GAUCHE_2,
            Operateur::Star | Operateur::Slash => GAUCHE_3,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Minus => '-',
            Operateur::Star => '*',
            Operateur::Slash => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Minus),
            '*' => Some(Operateur::Star),
            '/' => Some(Operateur::Slash),
            _ => None,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),

    // moins unaire
    Neg,

    LPar,
    RPar,
}

/// Accumulateur du pli : jetons produits + littéral numérique en cours.
#[derive(Default)]
struct Lecture {
    jetons: Vec<Tok>,
    nombre: String,
}

impl Lecture {
    fn vider_nombre(mut self) -> Self {
        if !self.nombre.is_empty() {
            self.jetons.push(Tok::Num(parse_nombre(&self.nombre)));
            self.nombre.clear();
        }
        self
    }

    /// Un '-' est unaire en début d’expression, après '(' ou après un opérateur (unaire compris).
    fn moins_est_unaire(&self) -> bool {
        matches!(
            self.jetons.last(),
            None | Some(Tok::LPar) | Some(Tok::Op(_)) | Some(Tok::Neg)
        )
    }

    fn lire(mut self, c: char) -> Self {
        if c.is_ascii_digit() || c == '.' {
            self.nombre.push(c);
            return self;
        }

        let mut l = self.vider_nombre();
        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '-' if l.moins_est_unaire() => Some(Tok::Neg),
            _ => Operateur::depuis_symbole(c).map(Tok::Op),
        };
        if let Some(t) = tok {
            l.jetons.push(t);
        }
        l
    }
}

/// Lecture permissive d’un littéral (chiffres et '.') :
/// - coupé au deuxième '.' ("1.2.3" -> 1.2)
/// - sans chiffre avant la coupure ("." / "..5") -> NaN
pub fn parse_nombre(litteral: &str) -> f64 {
    let fin = litteral
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(litteral.len());

    litteral[..fin].parse::<f64>().unwrap_or(f64::NAN)
}

/// Tokenize une chaîne en jetons (une passe, gauche -> droite).
///
/// Jamais d’échec : tout caractère hors de `0-9 . + - * / ( )` est ignoré
/// (mais termine le nombre en cours : "1 2" donne deux nombres).
pub fn tokenize(s: &str) -> Vec<Tok> {
    s.chars()
        .fold(Lecture::default(), Lecture::lire)
        .vider_nombre()
        .jetons
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(x) => format!("{x}"),
            Tok::Op(op) => op.to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
