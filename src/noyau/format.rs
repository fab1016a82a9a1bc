// src/noyau/format.rs

/// Rend une valeur finie en texte décimal.
///
/// Contrat (idempotence du commit) : le texte retourné, ré-évalué, redonne
/// exactement la même valeur. On s'appuie sur le Display de f64 (forme
/// décimale la plus courte qui round-trip) — jamais de notation
/// scientifique, jamais de séparateurs de milliers : le résultat déposé
/// dans la zone d'entrée doit rester une expression valide.
///
/// Cas particulier : -0 s'affiche « 0 » (le signe d'un zéro n'a aucun sens
/// pour l'utilisateur, et « -0 » se re-tokeniserait en 0 - 0).
pub fn format_valeur(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
