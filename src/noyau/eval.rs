//! Noyau : pipeline complet
//!
//! textes (centre, rayon, n, expression) -> paramètres validés -> jetons -> Programme
//!        -> Contour -> intégrale (séquentielle ou parallèle) -> canonique + lecture + démarche

use tracing::info;

use super::complexe::Complexe;
use super::contour::{integrer, integrer_parallele, Contour};
use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::format::{format_algebrique, format_complexe};
use super::jetons::{decouper, format_jetons};
use super::rpn::Programme;

/// Entrée brute (telle que tapée dans l’UI).
#[derive(Clone, Debug, Default)]
pub struct EntreeIntegrale {
    pub centre: String,
    pub rayon: String,
    pub n: String,
    pub expression: String,
    pub parallele: bool,
}

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub contour: String,
    pub echantillons: String,
    pub mode: String,
    pub note: String,
}

/// Résultat d’une intégration réussie.
#[derive(Clone, Debug)]
pub struct ResultatIntegrale {
    pub valeur: Complexe,
    /// "(re,im)" relisible sans perte
    pub canonique: String,
    /// décimales fixes (selon `chiffres`)
    pub lecture: String,
    pub demarche: DemarcheNoyau,
}

/// Intègre une suite de jetons texte sur le cercle (centre, rayon) en n arcs.
/// Point d’entrée commun CLI + UI.
pub fn integrer_jetons<S: AsRef<str>>(
    centre: Complexe,
    rayon: f64,
    n: usize,
    jetons: &[S],
    parallele: bool,
) -> ResultatNoyau<Complexe> {
    let contour = Contour::new(centre, rayon, n)?;
    let programme = Programme::compiler(jetons);
    if parallele {
        integrer_parallele(&programme, &contour)
    } else {
        integrer(&programme, &contour)
    }
}

/// API UI : lit les champs texte, intègre, et prépare l’affichage.
pub fn eval_integrale(
    entree: &EntreeIntegrale,
    chiffres: usize,
) -> ResultatNoyau<ResultatIntegrale> {
    // 1) Paramètres
    let centre: Complexe = entree.centre.trim().parse()?;
    let rayon = lire_rayon(&entree.rayon)?;
    let n = lire_n(&entree.n)?;

    // 2) Jetons
    let jetons = decouper(&entree.expression);
    if jetons.is_empty() {
        return Err(ErreurNoyau::ParametreInvalide {
            parametre: "expression",
            raison: "entrée vide".into(),
        });
    }

    // 3) Programme + contour
    let programme = Programme::compiler(&jetons);
    let contour = Contour::new(centre, rayon, n)?;

    // 4) Intégrale
    let valeur = if entree.parallele {
        integrer_parallele(&programme, &contour)?
    } else {
        integrer(&programme, &contour)?
    };
    info!(%valeur, n, "intégrale calculée");

    // 5) Démarche
    let demarche = DemarcheNoyau {
        jetons: format_jetons(programme.jetons()),
        contour: format!("centre {centre}, rayon {rayon}"),
        echantillons: format!("n = {n}, pas = 2pi/{n} = {:.6}", contour.pas()),
        mode: if entree.parallele {
            "parallèle (somme ordonnée)".into()
        } else {
            "séquentiel".into()
        },
        note: format!(
            "somme des f(z_mid)*(z_(i+1) - z_i), point milieu ; = {}",
            format_algebrique(valeur, chiffres)
        ),
    };

    Ok(ResultatIntegrale {
        valeur,
        canonique: format_complexe(valeur, None),
        lecture: format_complexe(valeur, Some(chiffres)),
        demarche,
    })
}

fn lire_rayon(s: &str) -> ResultatNoyau<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| ErreurNoyau::ParametreInvalide {
            parametre: "rayon",
            raison: format!("{s:?}: {e}"),
        })
}

fn lire_n(s: &str) -> ResultatNoyau<usize> {
    s.trim()
        .parse::<usize>()
        .map_err(|e| ErreurNoyau::ParametreInvalide {
            parametre: "n",
            raison: format!("{s:?}: {e}"),
        })
}
