//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - seules les erreurs typées sont admises, jamais de panique
//! - invariant clé : un affichage est "Error" (non fini) ou se relit à l’identique

use std::time::{Duration, Instant};

use super::format::{format_nombre, TEXTE_ERREUR};
use super::{evaluate, EvalError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn check_affichage(expr: &str, affichage: &str) {
    if affichage == TEXTE_ERREUR {
        return;
    }
    let relu: f64 = affichage
        .parse()
        .unwrap_or_else(|_| panic!("affichage illisible: expr={expr:?} -> {affichage:?}"));
    assert_eq!(format_nombre(relu), affichage, "expr={expr:?}");
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour tester la division par zéro)
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}.{}", rng.pick(100))
    } else {
        format!("{a}")
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("{}/{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => format!("-({})", gen_expr(rng, depth - 1)),
    }
}

/// Soupe de caractères du clavier (souvent invalide).
fn gen_soupe(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_affichage() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let premier = evaluate(&expr);

        // Même entrée => même sortie
        assert_eq!(premier, evaluate(&expr), "expr={expr:?}");

        match premier {
            Ok(affichage) => {
                check_affichage(&expr, &affichage);
                seen_ok += 1;
            }
            Err(e) => {
                // expressions bien formées : seule la division par zéro échoue
                assert!(
                    matches!(e, EvalError::DivisionByZero),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let expr = gen_soupe(&mut rng, len);

        if let Ok(affichage) = evaluate(&expr) {
            check_affichage(&expr, &affichage);
        }
    }
}

#[test]
fn fuzz_safe_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 800].join("+");
    budget(t0, max);

    let res = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(res, "400");
}

#[test]
fn fuzz_safe_non_fini_formate() {
    // débordement ou littéral sans chiffre : "Error" en résultat, jamais Err
    let grand = format!("9{}", "9".repeat(307));
    for expr in [
        ".".to_string(),
        "(.)*2".to_string(),
        format!("{grand}*{grand}"),
        format!("-{grand}*{grand}"),
    ] {
        let res = evaluate(&expr);
        assert_eq!(res, Ok(TEXTE_ERREUR.to_string()), "expr={expr:?}");
        check_affichage(&expr, TEXTE_ERREUR);
    }
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let expr = format!("{}1{}", "(-".repeat(500), ")".repeat(500));
    // nombre pair de négations
    assert_eq!(evaluate(&expr), Ok("1".to_string()));
}
