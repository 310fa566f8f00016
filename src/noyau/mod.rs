//! Noyau : intégrale de contour d’une fonction complexe donnée en RPN
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées du noyau
//! - complexe.rs : Complexe (arithmétique, parse, forme canonique)
//! - pile.rs     : pile d’évaluation
//! - jetons.rs   : classement des jetons + découpage d’une ligne
//! - rpn.rs      : évaluateur postfixé + Programme pré-classé
//! - contour.rs  : échantillonnage du cercle (point milieu), séquentiel ou parallèle
//! - format.rs   : affichage à décimales fixes
//! - eval.rs     : pipeline complet (UI)

pub mod complexe;
pub mod contour;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod pile;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use complexe::Complexe;
pub use contour::{integrer, integrer_parallele, Contour};
pub use erreur::{ErreurNoyau, ResultatNoyau};
pub use eval::{eval_integrale, integrer_jetons};
pub use rpn::{evaluer, Programme};
