// src/noyau/contour.rs
//
// Intégrale de contour sur un cercle (règle du point milieu).
//
// Pour i dans [0, n) :
//   φ_i   = i·2π/n,  pas = 2π/n
//   z_mid = centre + r·e^{i(φ_i + pas/2)}   (valeur liée à la variable libre)
//   corde = z(φ_i + pas) - z(φ_i)
//   total += f(z_mid) · corde
//
// Accumulation toujours dans l’ordre des indices : la version parallèle
// évalue en parallèle mais additionne ensuite séquentiellement (même résultat, bit à bit).

use std::f64::consts::TAU;

use num_traits::Zero;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::complexe::Complexe;
use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::rpn::Programme;

/// Cercle échantillonné en `n` arcs égaux.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contour {
    centre: Complexe,
    rayon: f64,
    n: usize,
}

impl Contour {
    /// Valide les paramètres : centre fini, rayon fini > 0, n ≥ 1.
    pub fn new(centre: Complexe, rayon: f64, n: usize) -> ResultatNoyau<Self> {
        if !centre.est_fini() {
            return Err(ErreurNoyau::ParametreInvalide {
                parametre: "centre",
                raison: format!("{centre} n’est pas fini"),
            });
        }
        if !rayon.is_finite() || rayon <= 0.0 {
            return Err(ErreurNoyau::ParametreInvalide {
                parametre: "rayon",
                raison: format!("{rayon} doit être un réel fini > 0"),
            });
        }
        if n == 0 {
            return Err(ErreurNoyau::ParametreInvalide {
                parametre: "n",
                raison: "au moins un échantillon".into(),
            });
        }
        Ok(Self { centre, rayon, n })
    }

    pub fn centre(&self) -> Complexe {
        self.centre
    }

    pub fn rayon(&self) -> f64 {
        self.rayon
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Pas angulaire 2π/n.
    pub fn pas(&self) -> f64 {
        TAU / self.n as f64
    }

    /// Point du cercle à l’angle φ.
    pub fn point(&self, phi: f64) -> Complexe {
        self.centre + Complexe::depuis_polaire(self.rayon, phi)
    }

    /// (z_mid, corde) pour l’échantillon i.
    pub fn echantillon(&self, i: usize) -> (Complexe, Complexe) {
        let pas = self.pas();
        let phi = i as f64 * TAU / self.n as f64;
        let z1 = self.point(phi);
        let z2 = self.point(phi + pas);
        let z_mid = self.point(phi + pas / 2.0);
        (z_mid, z2 - z1)
    }

    /// Contribution f(z_mid)·corde de l’échantillon i.
    fn contribution(&self, programme: &Programme, i: usize) -> ResultatNoyau<Complexe> {
        let (z_mid, corde) = self.echantillon(i);
        let f = programme
            .evaluer(z_mid)
            .map_err(|e| ErreurNoyau::Echantillon {
                indice: i,
                source: Box::new(e),
            })?;
        trace!(i, z = %z_mid, f = %f, "échantillon");
        Ok(f * corde)
    }
}

/// Intégration séquentielle ; s’arrête au premier échantillon en erreur.
pub fn integrer(programme: &Programme, contour: &Contour) -> ResultatNoyau<Complexe> {
    debug!(
        centre = %contour.centre,
        rayon = contour.rayon,
        n = contour.n,
        jetons = programme.jetons().len(),
        "intégration séquentielle"
    );

    let mut total = Complexe::zero();
    for i in 0..contour.n {
        match contour.contribution(programme, i) {
            Ok(c) => total += c,
            Err(e) => {
                debug!(erreur = %e, "intégration interrompue");
                return Err(e);
            }
        }
    }
    Ok(total)
}

/// Intégration parallèle (rayon) ; résultat identique à `integrer`.
/// En cas d’erreurs multiples, c’est la plus petite position qui est rapportée.
pub fn integrer_parallele(programme: &Programme, contour: &Contour) -> ResultatNoyau<Complexe> {
    debug!(
        centre = %contour.centre,
        rayon = contour.rayon,
        n = contour.n,
        jetons = programme.jetons().len(),
        "intégration parallèle"
    );

    let contributions: Vec<ResultatNoyau<Complexe>> = (0..contour.n)
        .into_par_iter()
        .map(|i| contour.contribution(programme, i))
        .collect();

    // somme séquentielle, dans l’ordre des indices
    let mut total = Complexe::zero();
    for c in contributions {
        match c {
            Ok(c) => total += c,
            Err(e) => {
                debug!(erreur = %e, "intégration interrompue");
                return Err(e);
            }
        }
    }
    Ok(total)
}
