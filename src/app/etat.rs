//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’intégrateur (paramètres du cercle, expression RPN,
//! résultats, erreur, précision, démarche) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fous : bornes sur la précision d’affichage et sur n.

/// Décimales affichées par défaut (lecture).
const CHIFFRES_DEFAUT: usize = 10;

/// Au-delà de 17 décimales, un f64 n’apporte plus rien.
const CHIFFRES_MAX: usize = 17;

/// Échantillons par défaut.
pub const N_DEFAUT: usize = 1000;

/// Garde-fou : borne sur n (anti-gel de l’UI).
pub const N_MAX: usize = 1_000_000;

const CENTRE_DEFAUT: &str = "(0,0)";
const RAYON_DEFAUT: &str = "1";

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub contour: String,
    pub echantillons: String,
    pub mode: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppContour {
    // --- entrées utilisateur ---
    pub centre: String,
    pub rayon: String,
    pub n: String,
    pub expression: String, // jetons RPN séparés par des blancs

    // --- sorties ---
    pub canonique: String,   // "(re,im)" relisible sans perte
    pub lecture: String,     // décimales fixes
    pub erreur: String,      // message d’erreur (si parsing/éval échoue)
    pub lecture_dispo: bool, // false si vide / erreur

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub chiffres: usize,
    pub parallele: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’expression après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppContour {
    fn default() -> Self {
        Self {
            centre: CENTRE_DEFAUT.to_string(),
            rayon: RAYON_DEFAUT.to_string(),
            n: N_DEFAUT.to_string(),
            expression: String::new(),
            canonique: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            chiffres: CHIFFRES_DEFAUT,
            parallele: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppContour {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : effacer seulement l’expression (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.expression.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.canonique.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `canonique` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la lecture + démarche (non fiables si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(
        &mut self,
        canonique: impl Into<String>,
        lecture: impl Into<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.canonique = canonique.into();
        self.lecture = lecture.into();
        self.lecture_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite la précision d’affichage.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.clamp(0, CHIFFRES_MAX);
        self.focus_entree = true;
    }

    /// Garde-fou : n lisible et dans [1, N_MAX], sinon message prêt à afficher.
    pub fn n_borne(&self) -> Result<(), String> {
        match self.n.trim().parse::<usize>() {
            Ok(n) if n > N_MAX => Err(format!("n trop grand (max {N_MAX})")),
            // le reste (0, texte invalide) est rapporté par le noyau
            _ => Ok(()),
        }
    }

    pub fn chiffres_max() -> usize {
        CHIFFRES_MAX
    }
}
