// src/noyau/calcul.rs

use super::erreur::EvalError;
use super::jetons::{Operateur, Tok};

fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Minus => Ok(a - b),
        Operateur::Star => Ok(a * b),
        Operateur::Slash => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Évalue une RPN sur une pile de valeurs.
///
/// Binaire : b est dépilé en premier (opérande de droite), puis a.
/// À la fin, la pile doit contenir exactement une valeur.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for &tok in rpn {
        match tok {
            Tok::Num(x) => st.push(x),

            Tok::Neg => {
                let x = st.pop().ok_or(EvalError::InvalidExpression)?;
                st.push(-x);
            }

            Tok::Op(op) => {
                let b = st.pop().ok_or(EvalError::InvalidExpression)?;
                let a = st.pop().ok_or(EvalError::InvalidExpression)?;
                st.push(appliquer(op, a, b)?);
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::InvalidExpression),
        }
    }

    match st.as_slice() {
        [x] => Ok(*x),
        _ => Err(EvalError::InvalidExpression),
    }
}
