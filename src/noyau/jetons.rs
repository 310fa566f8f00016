// src/noyau/jetons.rs
//
// Jetons d’une expression postfixée.
// - `z`        : la variable libre
// - `(re,im)`  : littéral complexe
// - opérateur  : un seul caractère parmi + - * / ~ # ! ;
//
// L’ensemble des opérateurs est fermé : enum + match, pas de table mutable.

use super::complexe::Complexe;
use super::erreur::{ErreurNoyau, ResultatNoyau};

/// Marqueur de la variable libre.
pub const VARIABLE: &str = "z";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,     // +
    Moins,    // -
    Fois,     // *
    Divise,   // /
    Conjugue, // ~
    Negation, // #
    Duplique, // !
    Rotation, // ;
}

impl Operateur {
    pub const TOUS: [Operateur; 8] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Conjugue,
        Operateur::Negation,
        Operateur::Duplique,
        Operateur::Rotation,
    ];

    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        Some(match c {
            '+' => Operateur::Plus,
            '-' => Operateur::Moins,
            '*' => Operateur::Fois,
            '/' => Operateur::Divise,
            '~' => Operateur::Conjugue,
            '#' => Operateur::Negation,
            '!' => Operateur::Duplique,
            ';' => Operateur::Rotation,
            _ => return None,
        })
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Conjugue => '~',
            Operateur::Negation => '#',
            Operateur::Duplique => '!',
            Operateur::Rotation => ';',
        }
    }

    /// Nombre de valeurs que l’opérateur lit sur la pile.
    pub fn arite(self) -> usize {
        match self {
            Operateur::Plus | Operateur::Moins | Operateur::Fois | Operateur::Divise => 2,
            Operateur::Conjugue
            | Operateur::Negation
            | Operateur::Duplique
            | Operateur::Rotation => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Variable,
    Litteral(Complexe),
    Op(Operateur),
}

/// Classe un jeton texte.
/// - "z" exactement => Variable
/// - commence par '(' => littéral (erreur Format si mal formé)
/// - un seul caractère d’opérateur => Op
/// - tout le reste => OperateurInconnu
pub fn analyser_jeton(texte: &str) -> ResultatNoyau<Jeton> {
    if texte == VARIABLE {
        return Ok(Jeton::Variable);
    }
    if texte.starts_with('(') {
        return texte.parse::<Complexe>().map(Jeton::Litteral);
    }

    let mut chars = texte.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Operateur::depuis_symbole(c).map(Jeton::Op).ok_or_else(|| {
            ErreurNoyau::OperateurInconnu {
                jeton: texte.to_string(),
            }
        }),
        _ => Err(ErreurNoyau::OperateurInconnu {
            jeton: texte.to_string(),
        }),
    }
}

/// Découpe une ligne en jetons texte.
/// - séparateurs : blancs
/// - un groupe entre parenthèses reste un seul jeton, même avec des blancs dedans
///   ("( 1, 2 )" => "(1,2)"), pour qu’un littéral tapé à la main ne soit pas coupé.
/// - parenthèse non fermée : le reste de la ligne devient le jeton (le parse le refusera).
pub fn decouper(ligne: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut courant = String::new();
    let mut profondeur: usize = 0;

    for c in ligne.chars() {
        match c {
            '(' => {
                profondeur += 1;
                courant.push(c);
            }
            ')' => {
                profondeur = profondeur.saturating_sub(1);
                courant.push(c);
            }
            c if c.is_whitespace() => {
                if profondeur == 0 && !courant.is_empty() {
                    out.push(std::mem::take(&mut courant));
                }
                // blancs internes à un littéral : ignorés
            }
            _ => courant.push(c),
        }
    }

    if !courant.is_empty() {
        out.push(courant);
    }
    out
}

/// Jetons -> texte (démarche).
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Variable => VARIABLE.to_string(),
            Jeton::Litteral(c) => c.to_string(),
            Jeton::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
