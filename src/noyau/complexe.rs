// src/noyau/complexe.rs
//
// Nombre complexe en double précision (re, im).
// - Valeur `Copy` : chaque copie est indépendante.
// - Pas d’impl `Div` : la division passe par `diviser`, qui refuse le seul diviseur (0,0)
//   au lieu de produire des infinis silencieux.
// - Forme texte canonique : "(re,im)".
//   Display écrit la plus courte décimale qui relit le même f64 (exposant
//   pour les très grands et très petits modules), donc parse(to_string(a)) == a
//   pour toute valeur finie.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use super::erreur::{ErreurNoyau, ResultatNoyau};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complexe {
    pub re: f64,
    pub im: f64,
}

impl Complexe {
    pub const I: Complexe = Complexe { re: 0.0, im: 1.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Point r·(cos θ, sin θ).
    pub fn depuis_polaire(rayon: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(rayon * cos, rayon * sin)
    }

    /// Conjugué : (re, -im).
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// re² + im² (sans racine : sert à la division).
    pub fn module_carre(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// |z| = √(re² + im²)
    pub fn module(self) -> f64 {
        self.module_carre().sqrt()
    }

    /// Quotient self / diviseur.
    /// Erreur seulement si le diviseur vaut exactement (0,0) ; le calcul est mis à
    /// l’échelle (Smith) pour que |diviseur|² ne sous-déborde ni ne déborde.
    pub fn diviser(self, diviseur: Complexe) -> ResultatNoyau<Complexe> {
        if diviseur.is_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        let (c, d) = (diviseur.re, diviseur.im);
        if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Ok(Self::new(
                (self.re + self.im * r) / den,
                (self.im - self.re * r) / den,
            ))
        } else {
            let r = c / d;
            let den = c * r + d;
            Ok(Self::new(
                (self.re * r + self.im) / den,
                (self.im * r - self.re) / den,
            ))
        }
    }

    pub fn est_fini(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/* ------------------------ Opérateurs ------------------------ */

impl Add for Complexe {
    type Output = Complexe;
    fn add(self, b: Complexe) -> Complexe {
        Complexe::new(self.re + b.re, self.im + b.im)
    }
}

impl AddAssign for Complexe {
    fn add_assign(&mut self, b: Complexe) {
        self.re += b.re;
        self.im += b.im;
    }
}

impl Sub for Complexe {
    type Output = Complexe;
    fn sub(self, b: Complexe) -> Complexe {
        Complexe::new(self.re - b.re, self.im - b.im)
    }
}

impl Mul for Complexe {
    type Output = Complexe;
    fn mul(self, b: Complexe) -> Complexe {
        Complexe::new(
            self.re * b.re - self.im * b.im,
            self.re * b.im + self.im * b.re,
        )
    }
}

impl Neg for Complexe {
    type Output = Complexe;
    fn neg(self) -> Complexe {
        Complexe::new(-self.re, -self.im)
    }
}

impl Zero for Complexe {
    fn zero() -> Self {
        Complexe::new(0.0, 0.0)
    }
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complexe {
    fn one() -> Self {
        Complexe::new(1.0, 0.0)
    }
}

/* ------------------------ Texte ------------------------ */

impl fmt::Display for Complexe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        ecrire_reel(f, self.re)?;
        f.write_str(",")?;
        ecrire_reel(f, self.im)?;
        f.write_str(")")
    }
}

/// Plus courte décimale relisible ; notation exponentielle hors de [1e-5, 1e16).
fn ecrire_reel(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let a = x.abs();
    if a != 0.0 && !(1e-5..1e16).contains(&a) {
        write!(f, "{x:e}")
    } else {
        write!(f, "{x}")
    }
}

impl FromStr for Complexe {
    type Err = ErreurNoyau;

    /// Accepte exactement "(re,im)" ; blancs tolérés autour des nombres.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let erreur = || ErreurNoyau::Format {
            texte: s.to_string(),
        };

        let interieur = s
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(erreur)?;
        let (re, im) = interieur.split_once(',').ok_or_else(erreur)?;

        let re = lire_reel(re).ok_or_else(erreur)?;
        let im = lire_reel(im).ok_or_else(erreur)?;
        Ok(Complexe::new(re, im))
    }
}

/// Réel fini seulement ("inf", "NaN", "1e999" refusés).
fn lire_reel(champ: &str) -> Option<f64> {
    let v: f64 = champ.trim_matches(|c: char| c.is_ascii_whitespace()).parse().ok()?;
    v.is_finite().then_some(v)
}
