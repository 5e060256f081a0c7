//! src/app/etat.rs
//!
//! État UI (sans vue) + commandes de la calculatrice.
//!
//! Rôle : contenir l’état de session (expression, affichage, mode résultat,
//! historique, mémoire, notification) et appliquer les commandes du pavé /
//! du clavier. L’évaluation elle-même est déléguée au noyau (un appel, une réponse).
//!
//! Contrats :
//! - Aucun parsing de l’expression ici : c’est une simple chaîne concaténée.
//!   Seule la mémoire relit le nombre en tête de l’affichage.
//! - Une seule évaluation à la fois (boucle egui mono-thread).
//! - Historique borné (plus ancien supprimé), non persisté.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use tracing::info;

use crate::noyau::jetons::Operateur;
use crate::noyau::{evaluate_detaille, format_nombre};
use crate::reglages::Reglages;

/// Affichage au repos.
const AFFICHAGE_ZERO: &str = "0";

/// Affichage après un échec d’évaluation.
const AFFICHAGE_ERREUR: &str = "Error";

/// Commandes reçues des boutons ou du clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// Chiffre ou parenthèse.
    Saisie(char),
    Operateur(Operateur),
    Decimal,
    Evaluer,
    Effacer,
    Retour,
    MemoirePlus,
    MemoireMoins,
    MemoireRappel,
    MemoireEffacer,
    HistoriqueRappel(usize),
    HistoriqueEffacer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreNotification {
    Succes,
    Erreur,
    Info,
}

/// Notification transitoire (une seule à la fois).
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub genre: GenreNotification,
    pub message: String,
    /// Instant egui du premier affichage (posé par la vue).
    pub apparue_a: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    pub horodatage: DateTime<Local>,
}

/// Démarche de la dernière évaluation réussie.
#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- saisie ---
    pub expression: String,
    pub affichage: String,
    pub mode_resultat: bool,

    // --- session ---
    pub historique: VecDeque<EntreeHistorique>,
    pub memoire: f64,
    pub notification: Option<Notification>,
    pub demarche: Demarche,

    // --- UX ---
    pub historique_ouvert: bool,

    // --- paramètres ---
    pub historique_max: usize,
    pub duree_notification: f32,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            expression: String::new(),
            affichage: AFFICHAGE_ZERO.to_string(),
            mode_resultat: false,
            historique: VecDeque::new(),
            memoire: 0.0,
            notification: None,
            demarche: Demarche::default(),
            historique_ouvert: false,
            historique_max: reglages.historique_max,
            duree_notification: reglages.duree_notification,
        }
    }

    pub fn executer(&mut self, cmd: Commande) {
        match cmd {
            Commande::Saisie(c) => self.saisir(c.encode_utf8(&mut [0; 4])),
            Commande::Operateur(op) => self.operateur(op),
            Commande::Decimal => self.decimal(),
            Commande::Evaluer => self.evaluer(),
            Commande::Effacer => self.effacer(),
            Commande::Retour => self.retour(),
            Commande::MemoirePlus => self.memoire_plus(),
            Commande::MemoireMoins => self.memoire_moins(),
            Commande::MemoireRappel => self.memoire_rappel(),
            Commande::MemoireEffacer => self.memoire_effacer(),
            Commande::HistoriqueRappel(i) => self.rappeler_historique(i),
            Commande::HistoriqueEffacer => self.effacer_historique(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute du texte. Après un résultat : repart d’une expression neuve.
    pub fn saisir(&mut self, texte: &str) {
        if self.mode_resultat {
            self.expression = texte.to_string();
            self.affichage = texte.to_string();
            self.mode_resultat = false;
            return;
        }

        self.expression.push_str(texte);
        if self.affichage == AFFICHAGE_ZERO && texte != "." {
            self.affichage = texte.to_string();
        } else {
            self.affichage.push_str(texte);
        }
    }

    /// Opérateur : après un résultat, on enchaîne sur la valeur affichée.
    pub fn operateur(&mut self, op: Operateur) {
        if self.mode_resultat {
            self.expression = format!("{}{}", self.affichage, op.symbole());
            self.mode_resultat = false;
        } else {
            self.expression.push(op.symbole());
        }
        self.affichage = AFFICHAGE_ZERO.to_string();
    }

    /// Un seul '.' par nombre affiché.
    pub fn decimal(&mut self) {
        if !self.affichage.contains('.') {
            self.saisir(".");
        }
    }

    /// AC : expression vide, affichage à zéro.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.affichage = AFFICHAGE_ZERO.to_string();
        self.mode_resultat = false;
    }

    /// Retour arrière ; sur un résultat, équivaut à AC.
    pub fn retour(&mut self) {
        if self.mode_resultat {
            self.effacer();
            return;
        }

        self.expression.pop();
        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
        } else {
            self.affichage = AFFICHAGE_ZERO.to_string();
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : appelle le noyau, historise en cas de succès.
    pub fn evaluer(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        match evaluate_detaille(&self.expression) {
            Ok(ev) => {
                info!(expression = %self.expression, resultat = %ev.affichage, "calcul");

                self.historique.push_front(EntreeHistorique {
                    expression: std::mem::take(&mut self.expression),
                    resultat: ev.affichage.clone(),
                    horodatage: Local::now(),
                });
                self.historique.truncate(self.historique_max);

                self.demarche = Demarche {
                    jetons: ev.jetons,
                    rpn: ev.rpn,
                };
                self.expression = ev.affichage.clone();
                self.affichage = ev.affichage;
                self.mode_resultat = true;
                self.notifier(GenreNotification::Succes, "Résultat ajouté à l’historique");
            }
            Err(e) => {
                info!(expression = %self.expression, erreur = %e, "calcul refusé");

                self.affichage = AFFICHAGE_ERREUR.to_string();
                self.expression.clear();
                self.mode_resultat = true;
                self.notifier(GenreNotification::Erreur, e.to_string());
            }
        }
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Valeur numérique en tête de l’affichage (None si "Error" ou illisible).
    fn valeur_affichee(&self) -> Option<f64> {
        nombre_en_tete(&self.affichage)
    }

    pub fn memoire_plus(&mut self) {
        if let Some(v) = self.valeur_affichee() {
            self.memoire += v;
            self.notifier(GenreNotification::Succes, "Ajouté à la mémoire");
        }
    }

    pub fn memoire_moins(&mut self) {
        if let Some(v) = self.valeur_affichee() {
            self.memoire -= v;
            self.notifier(GenreNotification::Succes, "Soustrait de la mémoire");
        }
    }

    pub fn memoire_rappel(&mut self) {
        let texte = format_nombre(self.memoire);
        self.saisir(&texte);
    }

    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
        self.notifier(GenreNotification::Info, "Mémoire effacée");
    }

    /* ------------------------ Historique ------------------------ */

    /// Reprend l’expression d’une entrée (affichage remis à zéro).
    pub fn rappeler_historique(&mut self, index: usize) {
        let Some(entree) = self.historique.get(index) else {
            return;
        };
        self.expression = entree.expression.clone();
        self.affichage = AFFICHAGE_ZERO.to_string();
        self.mode_resultat = false;
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear();
        self.notifier(GenreNotification::Info, "Historique effacé");
    }

    /* ------------------------ Notification ------------------------ */

    pub fn notifier(&mut self, genre: GenreNotification, message: impl Into<String>) {
        self.notification = Some(Notification {
            genre,
            message: message.into(),
            apparue_a: None,
        });
    }

    /// Fait expirer la notification courante (horloge egui, en secondes).
    pub fn vieillir_notification(&mut self, maintenant: f64) {
        let duree = f64::from(self.duree_notification);
        if let Some(n) = &mut self.notification {
            let depuis = *n.apparue_a.get_or_insert(maintenant);
            if maintenant - depuis >= duree {
                self.notification = None;
            }
        }
    }
}

/// Plus long préfixe numérique d’un texte : "3)" -> 3, "1e+21" -> 1e21.
/// None si aucun nombre fini ne commence le texte ("Error", "(1").
pub fn nombre_en_tete(texte: &str) -> Option<f64> {
    texte
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|fin| texte[..fin].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
