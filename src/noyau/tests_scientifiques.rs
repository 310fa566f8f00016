//! Tests scientifiques (campagne) : identités + discipline de pile + intégrales connues.
//!
//! Notes :
//! - Le point milieu pondéré par la corde donne, pour 1/(z-c) avec c au centre,
//!   exactement n·2i·sin(π/n) : l’écart à 2πi est O(1/n²), d’où les tolérances.
//! - Les intégrales de fonctions holomorphes sur un cercle complet tombent à ~1e-12.

use std::f64::consts::{PI, TAU};
use std::time::{Duration, Instant};

use num_traits::Zero;

use super::complexe::Complexe;
use super::contour::{integrer, integrer_parallele, Contour};
use super::erreur::ErreurNoyau;
use super::eval::integrer_jetons;
use super::rpn::{evaluer, Programme};

fn c(re: f64, im: f64) -> Complexe {
    Complexe::new(re, im)
}

fn proche(a: Complexe, b: Complexe, tol: f64) -> bool {
    (a - b).module() <= tol
}

fn integrale(jetons: &[&str], centre: Complexe, rayon: f64, n: usize) -> Complexe {
    let p = Programme::compiler(jetons);
    let contour = Contour::new(centre, rayon, n).unwrap();
    integrer(&p, &contour).unwrap_or_else(|e| panic!("jetons={jetons:?} err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/// Quelques valeurs “pas trop gentilles”.
fn echantillon_valeurs() -> Vec<Complexe> {
    vec![
        c(0.0, 0.0),
        c(1.0, 0.0),
        c(0.0, -1.0),
        c(3.0, 4.0),
        c(-2.5, 0.125),
        c(1e-8, -7e5),
        c(123.456, -0.001),
        c(-1e12, 3.0e-3),
        c(PI, -TAU),
        c(0.1, 0.2),
    ]
}

/* ------------------------ Complexe ------------------------ */

#[test]
fn sci_aller_retour_texte() {
    for a in echantillon_valeurs() {
        let s = a.to_string();
        let b: Complexe = s.parse().unwrap_or_else(|e| panic!("s={s:?} err={e}"));
        assert_eq!(a, b, "s={s:?}");
    }
}

#[test]
fn sci_identites_arithmetiques() {
    let vals = echantillon_valeurs();
    for &a in &vals {
        // a·conj(a) = (|a|², 0)
        let p = a * a.conj();
        assert_eq!(p.im, 0.0, "a={a}");
        let m = a.module();
        assert!((p.re - m * m).abs() <= 1e-12 * (1.0 + p.re.abs()), "a={a}");

        for &b in &vals {
            assert_eq!(a + b, b + a);
            if !b.is_zero() {
                let q = (a * b).diviser(b).unwrap();
                let tol = 1e-9 * (1.0 + a.module());
                assert!(proche(q, a, tol), "a={a} b={b} q={q}");
            } else {
                assert_eq!(a.diviser(b), Err(ErreurNoyau::DivisionParZero));
            }
        }
    }
}

/* ------------------------ Évaluateur ------------------------ */

#[test]
fn sci_discipline_de_pile() {
    let o = Complexe::zero();
    assert_eq!(evaluer(&["(1,0)", "(2,0)", "+"], o), Ok(c(3.0, 0.0)));
    assert_eq!(evaluer(&["(5,0)", "(2,0)", "-"], o), Ok(c(3.0, 0.0)));
    assert_eq!(evaluer(&["z"], c(3.0, 4.0)), Ok(c(3.0, 4.0)));
}

#[test]
fn sci_erreurs_evaluateur() {
    let o = Complexe::zero();
    assert_eq!(
        evaluer(&["+"], o),
        Err(ErreurNoyau::PileVide {
            operateur: '+',
            requis: 2,
            present: 0
        })
    );
    assert_eq!(
        evaluer(&["(1,0)", "+"], o),
        Err(ErreurNoyau::PileVide {
            operateur: '+',
            requis: 2,
            present: 1
        })
    );
    assert_eq!(
        evaluer(&["(1,0)", "?"], o),
        Err(ErreurNoyau::OperateurInconnu { jeton: "?".into() })
    );
    assert_eq!(
        evaluer(&["(1,0)", "(0,0)", "/"], o),
        Err(ErreurNoyau::DivisionParZero)
    );
    assert_eq!(
        evaluer(&["z", "(1,0)"], o),
        Err(ErreurNoyau::PileNonConsommee { restants: 2 })
    );
    assert!(matches!(
        evaluer(&["(1,2"], o),
        Err(ErreurNoyau::Format { .. })
    ));
    for op in ["~", "#", "!", ";"] {
        assert!(
            matches!(evaluer(&[op], o), Err(ErreurNoyau::PileVide { requis: 1, .. })),
            "op={op}"
        );
    }
}

#[test]
fn sci_gauche_a_droite_sans_anticipation() {
    // l’erreur de pile arrive avant le littéral mal formé qui suit
    assert!(matches!(
        evaluer(&["-", "(oops"], Complexe::zero()),
        Err(ErreurNoyau::PileVide { .. })
    ));
}

#[test]
fn sci_integrale_gauche_a_droite() {
    // même ordre d’erreurs sur le chemin d’intégration (séquentiel et parallèle)
    for parallele in [false, true] {
        let e = integrer_jetons(Complexe::zero(), 1.0, 16, &["+", "(oops"], parallele)
            .unwrap_err();
        assert!(matches!(e, ErreurNoyau::Echantillon { indice: 0, .. }), "{e:?}");
        assert_eq!(
            e.racine(),
            &ErreurNoyau::PileVide {
                operateur: '+',
                requis: 2,
                present: 0
            }
        );

        // sans erreur de pile avant lui, le jeton mal formé est rapporté avec sa position
        let e = integrer_jetons(Complexe::zero(), 1.0, 16, &["z", "(oops"], parallele)
            .unwrap_err();
        assert!(matches!(e.racine(), ErreurNoyau::Format { .. }), "{e:?}");
        let ErreurNoyau::Echantillon { source, .. } = e else {
            panic!("enveloppe Echantillon attendue");
        };
        assert!(matches!(*source, ErreurNoyau::Jeton { position: 1, .. }));
    }
}

#[test]
fn sci_polynome() {
    // z² - 2z + (1,1) en z = (2,-1)
    let jetons = ["z", "!", "*", "(2,0)", "z", "*", "-", "(1,1)", "+"];
    let z = c(2.0, -1.0);
    let attendu = z * z - c(2.0, 0.0) * z + c(1.0, 1.0);
    assert_eq!(evaluer(&jetons, z), Ok(attendu));
}

/* ------------------------ Intégrales ------------------------ */

#[test]
fn sci_identite_et_constante() {
    let o = Complexe::zero();
    assert!(proche(integrale(&["z"], o, 1.0, 1000), o, 1e-12));
    assert!(proche(integrale(&["(1,0)"], o, 1.0, 1000), o, 1e-12));
}

#[test]
fn sci_un_sur_z_moins_c() {
    let centre = c(0.5, -1.5);
    // 1/(z - centre) : pôle à l’intérieur => 2πi
    let r = integrale(&["(1,0)", "z", "(0.5,-1.5)", "-", "/"], centre, 2.0, 2000);
    assert!(proche(r, c(0.0, TAU), 1e-5), "r={r}");

    // pôle dehors (c = 5) => 0
    let r = integrale(&["(1,0)", "z", "(5,0)", "-", "/"], Complexe::zero(), 1.0, 2000);
    assert!(proche(r, Complexe::zero(), 1e-9), "r={r}");
}

#[test]
fn sci_conjugue() {
    // ∮ conj(z) dz = 2πi·r² (cercle centré en 0)
    let r = integrale(&["z", "~"], Complexe::zero(), 1.5, 4000);
    assert!(proche(r, c(0.0, TAU * 2.25), 1e-4), "r={r}");
}

#[test]
fn sci_parallele_identique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);

    let jetons = ["z", "!", "*", "~", "(1,0)", "z", "(0.25,0.1)", "-", "/", "+", "#"];
    let p = Programme::compiler(&jetons);
    for (centre, rayon, n) in [
        (c(0.0, 0.0), 1.0, 1),
        (c(0.0, 0.0), 1.0, 17),
        (c(1.0, -1.0), 3.0, 1000),
        (c(-2.0, 0.5), 0.75, 20_000),
    ] {
        budget(start, max);
        let contour = Contour::new(centre, rayon, n).unwrap();
        let seq = integrer(&p, &contour).unwrap();
        let par = integrer_parallele(&p, &contour).unwrap();
        assert_eq!(seq.re.to_bits(), par.re.to_bits(), "n={n}");
        assert_eq!(seq.im.to_bits(), par.im.to_bits(), "n={n}");
    }
}
