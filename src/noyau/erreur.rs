// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs possibles du pipeline (aucun n’est fatal pour le processus).
///
/// - Jetons : jamais d’erreur (caractères inconnus ignorés).
/// - RPN    : `MismatchedParentheses`.
/// - Calcul : `InvalidExpression`, `DivisionByZero`.
/// - Final  : `NonFiniteResult` (NaN / ±inf) ne sort pas en `Err` : c’est le
///   libellé journalisé quand `format_nombre` affiche "Error".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("parenthèses non équilibrées")]
    MismatchedParentheses,

    #[error("expression invalide")]
    InvalidExpression,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("résultat non fini")]
    NonFiniteResult,
}
