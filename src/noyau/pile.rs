// src/noyau/pile.rs
//
// Pile d’évaluation : LIFO de Complexe, seul état mutable de l’évaluateur.
// - Créée vide pour chaque évaluation, jetée à la fin.
// - Les erreurs portent le symbole de l’opérateur qui a demandé la valeur.

use super::complexe::Complexe;
use super::erreur::{ErreurNoyau, ResultatNoyau};

#[derive(Clone, Debug, Default)]
pub struct Pile {
    valeurs: Vec<Complexe>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_capacite(n: usize) -> Self {
        Self {
            valeurs: Vec::with_capacity(n),
        }
    }

    pub fn profondeur(&self) -> usize {
        self.valeurs.len()
    }

    pub fn est_vide(&self) -> bool {
        self.valeurs.is_empty()
    }

    pub fn empiler(&mut self, v: Complexe) {
        self.valeurs.push(v);
    }

    /// Vérifie qu’au moins `requis` valeurs sont présentes avant d’appliquer `operateur`.
    /// Un opérateur qui échoue ne consomme donc rien.
    pub fn exiger(&self, requis: usize, operateur: char) -> ResultatNoyau<()> {
        if self.valeurs.len() < requis {
            return Err(ErreurNoyau::PileVide {
                operateur,
                requis,
                present: self.valeurs.len(),
            });
        }
        Ok(())
    }

    pub fn depiler(&mut self, operateur: char) -> ResultatNoyau<Complexe> {
        self.exiger(1, operateur)?;
        self.valeurs.pop().ok_or(ErreurNoyau::PileVide {
            operateur,
            requis: 1,
            present: 0,
        })
    }

    pub fn sommet(&self, operateur: char) -> ResultatNoyau<Complexe> {
        self.valeurs.last().copied().ok_or(ErreurNoyau::PileVide {
            operateur,
            requis: 1,
            present: 0,
        })
    }

    /// Rotation complète : le fond passe au sommet, l’ordre relatif du reste est conservé.
    pub fn rotation(&mut self, operateur: char) -> ResultatNoyau<()> {
        self.exiger(1, operateur)?;
        self.valeurs.rotate_left(1);
        Ok(())
    }

    /// Vue fond -> sommet (démarche, tests).
    pub fn valeurs(&self) -> &[Complexe] {
        &self.valeurs
    }
}
