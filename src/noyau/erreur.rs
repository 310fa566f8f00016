// src/noyau/erreur.rs
//
// Erreurs du noyau (typées).
// - Une évaluation qui échoue s’arrête net : pas de résultat partiel.
// - Les messages restent lisibles tels quels dans l’UI (Display).

use thiserror::Error;

/// Résultat standard du noyau.
pub type ResultatNoyau<T> = Result<T, ErreurNoyau>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurNoyau {
    /// Littéral qui ne respecte pas la forme "(re,im)".
    #[error("littéral invalide: {texte:?} (forme attendue: (re,im))")]
    Format { texte: String },

    /// Un opérateur demande plus de valeurs que la pile n’en contient.
    #[error("pile insuffisante pour '{operateur}': {requis} valeur(s) requise(s), {present} présente(s)")]
    PileVide {
        operateur: char,
        requis: usize,
        present: usize,
    },

    /// Jeton qui n’est ni `z`, ni un littéral, ni un opérateur connu.
    #[error("opérateur inconnu: {jeton:?}")]
    OperateurInconnu { jeton: String },

    /// Diviseur de module nul.
    #[error("division par zéro")]
    DivisionParZero,

    /// Il reste plus d’une valeur après le dernier jeton.
    #[error("pile non consommée: {restants} valeurs restantes (une seule attendue)")]
    PileNonConsommee { restants: usize },

    /// Paramètre de contour hors domaine (rayon, n, centre).
    #[error("paramètre invalide ({parametre}): {raison}")]
    ParametreInvalide {
        parametre: &'static str,
        raison: String,
    },

    /// Échec au jeton numéro `position` (compilation d’un programme).
    #[error("jeton {position}: {source}")]
    Jeton {
        position: usize,
        #[source]
        source: Box<ErreurNoyau>,
    },

    /// Échec à l’échantillon `indice` du contour.
    #[error("échantillon {indice}: {source}")]
    Echantillon {
        indice: usize,
        #[source]
        source: Box<ErreurNoyau>,
    },
}

impl ErreurNoyau {
    /// Erreur “racine” (sans les enveloppes Jeton/Echantillon).
    pub fn racine(&self) -> &ErreurNoyau {
        match self {
            ErreurNoyau::Jeton { source, .. } | ErreurNoyau::Echantillon { source, .. } => {
                source.racine()
            }
            autre => autre,
        }
    }
}
