// src/noyau/rpn.rs
//
// Évaluateur RPN (postfixé) sur les complexes.
//
// Règles (gauche -> droite, sans retour ni anticipation) :
// - z          : empile la valeur liée
// - (re,im)    : empile le littéral
// - + - * /    : dépile b, dépile a, empile a OP b (l’opérande empilé en premier est à gauche)
// - ~ / #      : conjugué / opposé du sommet
// - !          : duplique le sommet
// - ;          : rotation complète (le fond passe au sommet)
//
// Fin : exactement une valeur sur la pile, sinon erreur (vide ou non consommée).
// Aucun état n’est gardé entre deux appels : chaque évaluation a sa propre pile.

use super::complexe::Complexe;
use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::jetons::{analyser_jeton, Jeton, Operateur};
use super::pile::Pile;

/// Évalue une suite de jetons texte avec `z` lié à `valeur`.
/// Chaque jeton est classé au moment où on l’atteint.
pub fn evaluer<S: AsRef<str>>(jetons: &[S], valeur: Complexe) -> ResultatNoyau<Complexe> {
    let mut pile = Pile::avec_capacite(jetons.len());
    for texte in jetons {
        let jeton = analyser_jeton(texte.as_ref())?;
        appliquer(&mut pile, jeton, valeur)?;
    }
    finaliser(pile)
}

/// Une transition de pile pour un jeton déjà classé.
pub fn appliquer(pile: &mut Pile, jeton: Jeton, valeur: Complexe) -> ResultatNoyau<()> {
    match jeton {
        Jeton::Variable => pile.empiler(valeur),
        Jeton::Litteral(c) => pile.empiler(c),
        Jeton::Op(op) => appliquer_operateur(pile, op)?,
    }
    Ok(())
}

fn appliquer_operateur(pile: &mut Pile, op: Operateur) -> ResultatNoyau<()> {
    let s = op.symbole();
    pile.exiger(op.arite(), s)?;

    match op {
        Operateur::Plus | Operateur::Moins | Operateur::Fois | Operateur::Divise => {
            let b = pile.depiler(s)?;
            let a = pile.depiler(s)?;
            let r = match op {
                Operateur::Plus => a + b,
                Operateur::Moins => a - b,
                Operateur::Fois => a * b,
                _ => a.diviser(b)?,
            };
            pile.empiler(r);
        }
        Operateur::Conjugue => {
            let a = pile.depiler(s)?;
            pile.empiler(a.conj());
        }
        Operateur::Negation => {
            let a = pile.depiler(s)?;
            pile.empiler(-a);
        }
        Operateur::Duplique => {
            let a = pile.sommet(s)?;
            pile.empiler(a);
        }
        Operateur::Rotation => pile.rotation(s)?,
    }
    Ok(())
}

/// Lecture finale : une valeur exactement.
fn finaliser(mut pile: Pile) -> ResultatNoyau<Complexe> {
    match pile.profondeur() {
        0 | 1 => pile.depiler('='),
        restants => Err(ErreurNoyau::PileNonConsommee { restants }),
    }
}

/* ------------------------ Programme pré-classé ------------------------ */

/// Suite de jetons classée une fois, puis réévaluée pour chaque échantillon.
/// Lecture seule : partageable entre threads sans synchronisation.
///
/// Un jeton mal formé ne fait pas échouer la compilation : le classement s’arrête,
/// l’erreur est gardée avec sa position et ne sort qu’au moment où l’évaluation
/// atteint ce jeton. Une erreur de pile plus tôt dans la suite l’emporte donc,
/// comme avec `evaluer`.
#[derive(Clone, Debug, PartialEq)]
pub struct Programme {
    jetons: Vec<Jeton>,
    echec: Option<(usize, ErreurNoyau)>,
}

impl Programme {
    /// Classe les jetons jusqu’au premier jeton fautif (position 0-based).
    pub fn compiler<S: AsRef<str>>(textes: &[S]) -> Self {
        let mut jetons = Vec::with_capacity(textes.len());
        for (position, t) in textes.iter().enumerate() {
            match analyser_jeton(t.as_ref()) {
                Ok(jeton) => jetons.push(jeton),
                Err(e) => {
                    return Self {
                        jetons,
                        echec: Some((position, e)),
                    }
                }
            }
        }
        Self { jetons, echec: None }
    }

    /// Jetons classés (ceux qui précèdent un éventuel jeton fautif).
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    /// Position et erreur du premier jeton mal formé.
    pub fn echec(&self) -> Option<(usize, &ErreurNoyau)> {
        self.echec.as_ref().map(|(position, e)| (*position, e))
    }

    pub fn evaluer(&self, valeur: Complexe) -> ResultatNoyau<Complexe> {
        let mut pile = Pile::avec_capacite(self.jetons.len());
        for &jeton in &self.jetons {
            appliquer(&mut pile, jeton, valeur)?;
        }
        if let Some((position, e)) = &self.echec {
            return Err(ErreurNoyau::Jeton {
                position: *position,
                source: Box::new(e.clone()),
            });
        }
        finaliser(pile)
    }
}
