// src/noyau/format.rs
//
// Affichage des complexes.
// - canonique : Display de Complexe, "(re,im)", relisible sans perte
// - lecture   : nombre fixe de décimales (UI, CLI --chiffres)

use super::complexe::Complexe;

/// "(re,im)" avec `chiffres` décimales fixes ; forme canonique si None.
pub fn format_complexe(z: Complexe, chiffres: Option<usize>) -> String {
    match chiffres {
        None => z.to_string(),
        Some(d) => format!(
            "({},{})",
            format_reel(z.re, d),
            format_reel(z.im, d)
        ),
    }
}

/// Réel à `d` décimales ; "-0.000" devient "0.000" (bruit d’arrondi autour de zéro).
fn format_reel(x: f64, d: usize) -> String {
    let s = format!("{x:.d$}");
    match s.strip_prefix('-') {
        Some(reste) if reste.chars().all(|c| c == '0' || c == '.') => reste.to_string(),
        _ => s,
    }
}

/// Forme "a + bi" lisible (panneau Démarche).
pub fn format_algebrique(z: Complexe, chiffres: usize) -> String {
    let signe = if z.im.is_sign_negative() && format_reel(z.im, chiffres).starts_with('-') {
        '-'
    } else {
        '+'
    };
    format!(
        "{} {signe} {}i",
        format_reel(z.re, chiffres),
        format_reel(z.im.abs(), chiffres)
    )
}
