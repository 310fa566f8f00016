//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, toute erreur est d’un genre connu,
//!   et la même suite donne le même résultat (aucun état entre deux appels)

use std::time::{Duration, Instant};

use super::complexe::Complexe;
use super::erreur::ErreurNoyau;
use super::jetons::decouper;
use super::rpn::{evaluer, Programme};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de jetons (bornée) ------------------------ */

fn gen_reel(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "0".into(),
        1 => "1".into(),
        2 => "-1".into(),
        3 => "0.5".into(),
        4 => "2.25".into(),
        5 => "-3e2".into(),
        6 => "1e-3".into(),
        _ => format!("{}", rng.pick(100)),
    }
}

fn gen_jeton(rng: &mut Rng) -> String {
    match rng.pick(20) {
        0..=4 => "z".into(),
        5..=8 => format!("({},{})", gen_reel(rng), gen_reel(rng)),
        9 => "+".into(),
        10 => "-".into(),
        11 => "*".into(),
        12 => "/".into(),
        13 => "~".into(),
        14 => "#".into(),
        15 => "!".into(),
        16 => ";".into(),
        // déchets : doivent donner Format ou OperateurInconnu, jamais une panique
        _ => match rng.pick(8) {
            0 => "?".into(),
            1 => "(1,".into(),
            2 => "(a,b)".into(),
            3 => "zz".into(),
            4 => "".into(),
            5 => "(inf,0)".into(),
            6 => "++".into(),
            _ => "(1,2,3)".into(),
        },
    }
}

fn gen_suite(rng: &mut Rng, max_len: u32) -> Vec<String> {
    let len = 1 + rng.pick(max_len);
    (0..len).map(|_| gen_jeton(rng)).collect()
}

fn erreur_connue(e: &ErreurNoyau) -> bool {
    matches!(
        e,
        ErreurNoyau::Format { .. }
            | ErreurNoyau::PileVide { .. }
            | ErreurNoyau::OperateurInconnu { .. }
            | ErreurNoyau::DivisionParZero
            | ErreurNoyau::PileNonConsommee { .. }
    )
}

/// Compare deux résultats en acceptant NaN == NaN (débordements possibles).
fn meme_resultat(
    a: &Result<Complexe, ErreurNoyau>,
    b: &Result<Complexe, ErreurNoyau>,
) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => {
            x.re.to_bits() == y.re.to_bits() && x.im.to_bits() == y.im.to_bits()
        }
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_evaluateur_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x51A7_C0DE);

    let valeurs = [
        Complexe::new(0.0, 0.0),
        Complexe::new(1.0, -1.0),
        Complexe::new(0.5, 2.0),
    ];

    let mut ok = 0usize;
    for _ in 0..5_000 {
        budget(start, max);
        let suite = gen_suite(&mut rng, 12);
        for &z in &valeurs {
            let r1 = evaluer(&suite, z);
            let r2 = evaluer(&suite, z);
            assert!(meme_resultat(&r1, &r2), "suite={suite:?}");
            match &r1 {
                Ok(_) => ok += 1,
                Err(e) => assert!(erreur_connue(e), "suite={suite:?} err={e:?}"),
            }
        }
    }
    // la génération doit produire aussi des suites valides
    assert!(ok > 0);
}

#[test]
fn fuzz_programme_coherent_avec_evaluer() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(42);
    let z = Complexe::new(0.25, -0.75);

    for _ in 0..3_000 {
        budget(start, max);
        let suite = gen_suite(&mut rng, 10);
        let direct = evaluer(&suite, z);

        let p = Programme::compiler(&suite);
        let compile = p.evaluer(z);
        match (&compile, &direct) {
            // même erreur, seule l’enveloppe Jeton { position } diffère
            (Err(a), Err(b)) => assert_eq!(a.racine(), b, "suite={suite:?}"),
            _ => assert!(meme_resultat(&compile, &direct), "suite={suite:?}"),
        }
        if let Some((position, e)) = p.echec() {
            assert!(position < suite.len());
            assert!(matches!(
                e,
                ErreurNoyau::Format { .. } | ErreurNoyau::OperateurInconnu { .. }
            ));
        }
    }
}

#[test]
fn fuzz_decoupage_stable() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..2_000 {
        budget(start, max);
        let suite: Vec<String> = gen_suite(&mut rng, 10)
            .into_iter()
            .filter(|s| !s.is_empty() && !s.contains('('))
            .collect();
        // sans parenthèses, découper(join(" ")) redonne la suite
        assert_eq!(decouper(&suite.join(" ")), suite);
    }
}

#[test]
fn fuzz_texte_aller_retour_bits() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xF64);

    let mut testes = 0usize;
    for _ in 0..20_000 {
        budget(start, max);
        // bits quelconques : sous-normaux, -0, très grands exposants
        let re = f64::from_bits(rng.next_u64());
        let im = f64::from_bits(rng.next_u64());
        if !re.is_finite() || !im.is_finite() {
            continue;
        }
        let a = Complexe::new(re, im);
        let s = a.to_string();
        let b: Complexe = s.parse().unwrap_or_else(|e| panic!("s={s:?} err={e}"));
        assert_eq!(a.re.to_bits(), b.re.to_bits(), "s={s:?}");
        assert_eq!(a.im.to_bits(), b.im.to_bits(), "s={s:?}");
        testes += 1;
    }
    assert!(testes > 10_000);
}
