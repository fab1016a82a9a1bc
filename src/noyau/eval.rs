//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> eval_rpn -> Evaluation
//!
//! Convention de panne :
//! - tokenize / to_rpn signalent par Err (valeur, jamais de panic)
//! - eval_rpn signale par NaN (sentinelle) ; l'appelant teste la finitude
//! - eval_expression normalise le tout en TROIS issues : Valeur / Vide / Erreur
//!
//! Remarque : la division par zéro donne NaN (pas ±infini). « indéfini
//! mathématiquement » et « erreur » se rejoignent volontairement côté UI.

use super::jetons::{format_jetons, tokenize, Tok};
use super::rpn::to_rpn;

/// Issue d'une évaluation sécurisée. L'UI ne branche que sur ces trois cas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    /// Résultat fini.
    Valeur(f64),
    /// Entrée vide (ou espaces seuls) : pas une erreur, juste rien à dire.
    Vide,
    /// Lexical, parenthèses, arité, division par zéro, débordement… tout
    /// s'effondre ici.
    Erreur,
}

/// Évalue une RPN avec une pile d'opérandes.
///
/// Retourne NaN sur toute panne :
/// - opérande manquante (pile trop courte au pop)
/// - division par zéro
/// - pile finale ≠ 1 valeur (ex: "1 2" sans opérateur)
/// - parenthèse résiduelle (impossible via to_rpn, vérifié quand même)
///
/// Aucun résultat partiel : on sort immédiatement.
pub fn eval_rpn(rpn: &[Tok]) -> f64 {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // droite d'abord, gauche ensuite
                let b = match pile.pop() {
                    Some(v) => v,
                    None => return f64::NAN,
                };
                let a = match pile.pop() {
                    Some(v) => v,
                    None => return f64::NAN,
                };

                let r = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return f64::NAN;
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                pile.push(r);
            }

            Tok::LPar | Tok::RPar => return f64::NAN,
        }
    }

    if pile.len() != 1 {
        return f64::NAN;
    }
    pile.pop().unwrap()
}

/// API publique : évaluation TOTALE d'une chaîne brute.
///
/// Pour toute entrée, termine et retourne exactement une des trois issues ;
/// aucune panne ne remonte à l'appelant.
pub fn eval_expression(s: &str) -> Evaluation {
    let jetons = match tokenize(s) {
        Ok(j) => j,
        Err(_) => return Evaluation::Erreur,
    };

    if jetons.is_empty() {
        return Evaluation::Vide;
    }

    let rpn = match to_rpn(&jetons) {
        Ok(r) => r,
        Err(_) => return Evaluation::Erreur,
    };

    let v = eval_rpn(&rpn);
    if v.is_finite() {
        Evaluation::Valeur(v)
    } else {
        // NaN (panne) ou ±infini (débordement) : même issue
        Evaluation::Erreur
    }
}

/* ------------------------ Démarche (panneau détails) ------------------------ */

/// Formes textuelles intermédiaires d'une expression bien formée.
#[derive(Clone, Debug, Default)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Jetons + RPN en texte, pour le panneau « Détails » de la vue.
/// None si l'expression est vide ou ne passe pas les deux premiers étages.
pub fn demarche(s: &str) -> Option<Demarche> {
    let jetons = tokenize(s).ok()?;
    if jetons.is_empty() {
        return None;
    }
    let rpn = to_rpn(&jetons).ok()?;

    Some(Demarche {
        jetons: format_jetons(&jetons),
        rpn: format_jetons(&rpn),
    })
}
