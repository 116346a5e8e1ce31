//! Noyau postfixe
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées par étage
//! - regles.rs   : règles d’évaluation (permissives par défaut)
//! - jetons.rs   : tokenisation + équilibre des parenthèses
//! - rpn.rs      : shunting-yard (infixe -> postfixe)
//! - eval.rs     : pile de valeurs + pipeline complet
//! - format.rs   : réponse en texte

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod regles;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluer_detail, parse_and_evaluate, parse_and_evaluate_avec, reponse_texte, Evaluation};
pub use regles::Regles;
