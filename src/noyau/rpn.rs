// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Num        : sortie directe
// - Op         : dépile tant que le sommet est plus prioritaire
//                (ou aussi prioritaire et op associatif à gauche)
// - Neg        : empilé sans rien dépiler (préfixe, associatif à droite).
//                Sur la pile il domine tout opérateur binaire, donc le
//                prochain binaire le sort : "-5+3" = (-5)+3, "--5" = -(-5).
// - LPar / RPar: parenthèses classiques, jamais en sortie.

use super::erreur::EvalError;
use super::jetons::{Associativite, OperatorSpec, Tok, NEG_SPEC};

/// Précédence d’un jeton au sommet de la pile (None = barrière: parenthèse).
fn spec_sommet(t: &Tok) -> Option<OperatorSpec> {
    match t {
        Tok::Op(op) => Some(op.spec()),
        Tok::Neg => Some(NEG_SPEC),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(3), Op(*), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                let spec = op.spec();

                while let Some(top) = ops.last().and_then(spec_sommet) {
                    let doit_pop = top.precedence > spec.precedence
                        || (top.precedence == spec.precedence
                            && spec.associativite == Associativite::Gauche);

                    if !doit_pop {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }

                ops.push(tok);
            }

            Tok::Neg | Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(t) => out.push(t),
                    None => return Err(EvalError::MismatchedParentheses),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(EvalError::MismatchedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}
