//! Noyau d'évaluation arithmétique
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation (+ normalisation × ÷ − et moins unaire)
//! - rpn.rs     : shunting-yard (infixe -> postfix)
//! - eval.rs    : évaluation RPN + composition sécurisée
//! - format.rs  : rendu décimal round-trip

pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{demarche, eval_expression, Demarche, Evaluation};
pub use format::format_valeur;
