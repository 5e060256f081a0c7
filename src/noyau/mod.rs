//! Noyau arithmétique
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation + table des opérateurs
//! - rpn.rs     : shunting-yard (infixe -> postfixe)
//! - calcul.rs  : évaluation de la RPN (pile de f64)
//! - format.rs  : affichage borné (12 chiffres significatifs)
//! - erreur.rs  : erreurs typées
//! - eval.rs    : pipeline complet
//!
//! Tout est pur : aucun état partagé, aucune E/S (hors journalisation).

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate, evaluate_detaille, Evaluation};
pub use format::format_nombre;
