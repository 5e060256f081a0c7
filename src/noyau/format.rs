// src/noyau/format.rs

/// Chiffres significatifs conservés à l’affichage.
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Texte affiché pour NaN / ±inf.
pub const TEXTE_ERREUR: &str = "Error";

/// Arrondi à `chiffres` chiffres significatifs (via l’écriture scientifique).
fn arrondi_significatif(x: f64, chiffres: usize) -> f64 {
    let precision = chiffres.saturating_sub(1);
    format!("{x:.precision$e}").parse().unwrap_or(x)
}

/// Écriture canonique minimale d’un flottant fini :
/// - chiffres les plus courts qui relisent la même valeur
/// - pas de zéros finaux, pas de point final, "-0" -> "0"
/// - notation décimale pour un exposant décimal dans [-7, 21), sinon "1e+21" / "1.5e-7"
fn ecriture_minimale(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    // "{:e}" = plus courte écriture exacte, ex: "1.2345e2", "3e-1"
    let sci = format!("{:e}", x.abs());
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i32 = exposant.parse().unwrap_or(0);

    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();
    let k = chiffres.len() as i32;
    // position du point décimal par rapport au premier chiffre
    let n = exposant + 1;

    let corps = if k <= n && n <= 21 {
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let signe_exp = if n - 1 < 0 { '-' } else { '+' };
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe_exp}{}", (n - 1).abs())
        } else {
            format!("{tete}.{reste}e{signe_exp}{}", (n - 1).abs())
        }
    };

    if x < 0.0 {
        format!("-{corps}")
    } else {
        corps
    }
}

/// Affichage d’un résultat numérique.
///
/// NaN / ±inf => "Error". Sinon arrondi à 12 chiffres significatifs puis
/// écriture minimale : `0.1 + 0.2` s’affiche "0.3".
pub fn format_nombre(x: f64) -> String {
    if !x.is_finite() {
        return TEXTE_ERREUR.to_string();
    }
    ecriture_minimale(arrondi_significatif(x, CHIFFRES_SIGNIFICATIFS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bruit_flottant_borne() {
        assert_eq!(format_nombre(0.1 + 0.2), "0.3");
        assert_eq!(format_nombre(1.1 * 3.0), "3.3");
    }

    #[test]
    fn entiers() {
        assert_eq!(format_nombre(4.0), "4");
        assert_eq!(format_nombre(-2.0), "-2");
        assert_eq!(format_nombre(123456789012.0), "123456789012");
    }

    #[test]
    fn douze_chiffres_significatifs() {
        assert_eq!(format_nombre(1.0 / 3.0), "0.333333333333");
        assert_eq!(format_nombre(2.0 / 3.0), "0.666666666667");
        assert_eq!(format_nombre(123456789012345.0), "123456789012000");
        assert_eq!(format_nombre(999999999999.9), "1000000000000");
    }

    #[test]
    fn pas_de_zeros_finaux() {
        assert_eq!(format_nombre(2.5), "2.5");
        assert_eq!(format_nombre(0.125), "0.125");
        assert_eq!(format_nombre(10.0), "10");
    }

    #[test]
    fn petits_et_grands() {
        assert_eq!(format_nombre(0.000001), "0.000001");
        assert_eq!(format_nombre(1.5e-7), "1.5e-7");
        assert_eq!(format_nombre(1e21), "1e+21");
        assert_eq!(format_nombre(-2.5e25), "-2.5e+25");
        assert_eq!(format_nombre(1e20), "100000000000000000000");
    }

    #[test]
    fn zero_negatif() {
        assert_eq!(format_nombre(-0.0), "0");
    }

    #[test]
    fn non_fini() {
        assert_eq!(format_nombre(f64::NAN), "Error");
        assert_eq!(format_nombre(f64::INFINITY), "Error");
        assert_eq!(format_nombre(f64::NEG_INFINITY), "Error");
    }

    #[test]
    fn idempotence() {
        for x in [0.3, 1.0 / 3.0, -2.5e25, 1.5e-7, 42.0, 0.1 + 0.2, 1e21] {
            let une = format_nombre(x);
            let relu: f64 = une.parse().unwrap();
            assert_eq!(format_nombre(relu), une, "x = {x}");
        }
    }
}
