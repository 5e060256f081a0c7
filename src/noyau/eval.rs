//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> calcul -> affichage
//!
//! Chaque étape échoue au plus tôt : la première erreur interrompt la suite.
//! Un résultat non fini (NaN / ±inf) n’est pas une erreur : `format_nombre`
//! l’affiche "Error".

use tracing::{debug, trace};

use super::calcul::eval_rpn;
use super::erreur::EvalError;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::rpn::to_rpn;

/// Résultat détaillé (affichage + démarche).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub affichage: String,
    pub valeur: f64,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne l’affichage + la démarche.
pub fn evaluate_detaille(expr_str: &str) -> Result<Evaluation, EvalError> {
    // 1) Jetons (jamais d’échec)
    let jetons = tokenize(expr_str);
    let jetons_txt = format_tokens(&jetons);
    trace!(expression = expr_str, jetons = %jetons_txt, "tokenisation");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    trace!(rpn = %rpn_txt, "shunting-yard");

    // 3) Calcul
    let valeur = eval_rpn(&rpn)?;

    // 4) Affichage (NaN / ±inf => "Error")
    let affichage = format_nombre(valeur);
    if valeur.is_finite() {
        debug!(expression = expr_str, resultat = %affichage, "évaluation");
    } else {
        debug!(expression = expr_str, valeur, erreur = %EvalError::NonFiniteResult, "évaluation");
    }

    Ok(Evaluation {
        affichage,
        valeur,
        jetons: jetons_txt,
        rpn: rpn_txt,
    })
}

/// Point d’entrée unique de l’UI : chaîne -> affichage, ou erreur typée.
pub fn evaluate(expr_str: &str) -> Result<String, EvalError> {
    evaluate_detaille(expr_str).map(|e| e.affichage)
}
