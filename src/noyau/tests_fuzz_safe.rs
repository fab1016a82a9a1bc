//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : TOTALITÉ — pour toute entrée, eval_expression termine
//!   et retourne exactement Valeur / Vide / Erreur, jamais de panic
//! - invariant clé : IDEMPOTENCE — toute Valeur reformatée se ré-évalue
//!   à l'identique

use std::time::{Duration, Instant};

use super::eval::{eval_expression, Evaluation};
use super::format::format_valeur;

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

/* ------------------------ Invariants ------------------------ */

fn check_idempotence(expr: &str, v: f64) {
    assert!(v.is_finite(), "Valeur non finie pour {expr:?}");
    let refait = eval_expression(&format_valeur(v));
    assert_eq!(
        refait,
        Evaluation::Valeur(v),
        "idempotence cassée: {expr:?} => {v}"
    );
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits littéraux, entiers et décimaux, incluant 0 (utile côté division)
    let n = rng.pick(10);
    if rng.coin() {
        let d = rng.pick(100);
        format!("{n}.{d:02}")
    } else {
        format!("{n}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("-{}", gen_nombre(rng)), // moins unaire sur littéral
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(7) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("-({})", gen_expr(rng, depth - 1)), // moins unaire sur groupe
        _ => format!("({}×{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
    }
}

/// Soupe de caractères : entrées hostiles, souvent mal formées exprès.
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '9', '.', '+', '-', '*', '/', '(', ')', '×', '÷', '−', ' ', 'x', '$',
        '^',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match eval_expression(&expr) {
            Evaluation::Valeur(v) => {
                check_idempotence(&expr, v);
                seen_ok += 1;
            }
            Evaluation::Erreur => {
                // seule panne légitime ici : division par zéro ou débordement,
                // le générateur ne produit pas de syntaxe invalide
                seen_err += 1;
            }
            Evaluation::Vide => panic!("Vide impossible: {expr:?} n'est pas vide"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne « balaye » rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_totalite_sur_soupe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut par_issue = [0usize; 3];

    for _ in 0..500 {
        budget(t0, max);

        let n = (1 + rng.pick(12)) as usize;
        let brut = gen_soupe(&mut rng, n);

        // Totalité : aucun panic, une issue parmi trois, c'est tout le contrat.
        match eval_expression(&brut) {
            Evaluation::Valeur(v) => {
                assert!(v.is_finite(), "Valeur non finie pour {brut:?}");
                par_issue[0] += 1;
            }
            Evaluation::Vide => par_issue[1] += 1,
            Evaluation::Erreur => par_issue[2] += 1,
        }
    }

    // La soupe doit produire surtout des erreurs, mais aussi quelques succès
    // (sinon l'alphabet ne couvre pas le langage).
    assert!(par_issue[2] > 100, "trop peu d'erreurs: {par_issue:?}");
    assert!(par_issue[0] > 5, "trop peu de succès: {par_issue:?}");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1", 800);
    budget(t0, max);

    assert_eq!(eval_expression(&expr), Evaluation::Valeur(800.0));
}

#[test]
fn fuzz_safe_somme_plate_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 2000 termes sans parenthèses : la pile d'opérateurs reste plate
    let expr = vec!["1"; 2000].join("+");
    budget(t0, max);

    assert_eq!(eval_expression(&expr), Evaluation::Valeur(2000.0));
}
