//! Intégrale de contour d’une fonction complexe donnée en RPN.
//!
//! - `noyau` : complexes, pile, évaluateur RPN, échantillonnage du cercle
//! - `app`   : interface eframe (natif + web)

pub mod app;
pub mod noyau;

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Intégrale de contour";
