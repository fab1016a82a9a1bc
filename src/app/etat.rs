//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l'UNIQUE tampon d'expression mutable du programme et
//! offrir des opérations simples (ajouter / retirer / effacer / valider)
//! sans logique d'affichage. La vue ne touche jamais le tampon directement.
//!
//! Contrats :
//! - Toute mutation rafraîchit l'aperçu via le noyau (eval_expression).
//! - Aperçu : visible seulement si l'expression courante vaut Valeur ;
//!   sinon blanc. L'indicateur « Erreur » n'apparaît qu'après un commit
//!   explicite raté (pas pendant la frappe).
//! - Actions déterministes, sans effet de bord caché ; l'écriture presse-
//!   papiers reste dans la vue.

use crate::noyau::{eval_expression, format_valeur, Evaluation};

/// Garde-fou : taille max du tampon d'expression (anti-abus / anti-gel).
const LONGUEUR_MAX: usize = 256;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- tampon d'expression (seul état mutable du programme) ---
    entree: String,

    // --- dérivés (recalculés à chaque mutation) ---
    pub apercu: String,      // aperçu live du résultat
    pub apercu_dispo: bool,  // false si vide / mal formé
    pub erreur: bool,        // indicateur « Erreur » (commit raté)
    pub note_copie: String,  // feedback transitoire après copie
}

impl AppCalc {
    /* ------------------------ Lecture ------------------------ */

    pub fn entree(&self) -> &str {
        &self.entree
    }

    /// Texte que l'action « copier » doit écrire (le résultat courant).
    pub fn texte_a_copier(&self) -> Option<&str> {
        if self.apercu_dispo {
            Some(&self.apercu)
        } else {
            None
        }
    }

    /* ------------------------ Actions « boutons » ------------------------ */

    /// Ajoute du texte au tampon (chiffre, opérateur, parenthèse).
    /// Au-delà du garde-fou de longueur : ignoré silencieusement.
    pub fn ajouter(&mut self, txt: &str) {
        if self.entree.chars().count() + txt.chars().count() > LONGUEUR_MAX {
            return;
        }
        self.entree.push_str(txt);
        self.invalider_feedback();
        self.rafraichir_apercu();
    }

    /// Retire le dernier caractère (scalaire Unicode complet : ×, ÷, −…).
    pub fn retirer_dernier(&mut self) {
        self.entree.pop();
        self.invalider_feedback();
        self.rafraichir_apercu();
    }

    /// C / Échap : remise à zéro totale.
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.apercu.clear();
        self.apercu_dispo = false;
        self.erreur = false;
        self.note_copie.clear();
    }

    /// = / Entrée : commit.
    /// - Valeur  : le tampon est REMPLACÉ par le résultat formaté
    ///   (ré-évaluable tel quel : idempotence du commit)
    /// - Vide    : rien à faire
    /// - Erreur  : lève l'indicateur
    pub fn valider(&mut self) {
        match eval_expression(&self.entree) {
            Evaluation::Valeur(v) => {
                self.entree = format_valeur(v);
                self.erreur = false;
                self.rafraichir_apercu();
            }
            Evaluation::Vide => {}
            Evaluation::Erreur => {
                self.erreur = true;
                self.apercu.clear();
                self.apercu_dispo = false;
            }
        }
        self.note_copie.clear();
    }

    /// À appeler par la vue juste après l'écriture presse-papiers.
    pub fn noter_copie(&mut self) {
        self.note_copie = "Résultat copié".to_string();
    }

    /* ------------------------ Interne ------------------------ */

    /// Toute édition périme l'indicateur d'erreur et le feedback de copie.
    fn invalider_feedback(&mut self) {
        self.erreur = false;
        self.note_copie.clear();
    }

    fn rafraichir_apercu(&mut self) {
        match eval_expression(&self.entree) {
            Evaluation::Valeur(v) => {
                self.apercu = format_valeur(v);
                self.apercu_dispo = true;
            }
            Evaluation::Vide | Evaluation::Erreur => {
                self.apercu.clear();
                self.apercu_dispo = false;
            }
        }
    }
}
