//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle indépendant (descente récursive) : même résultat bit à bit,
//!   ou échec des deux côtés (division par zéro, NaN)

use std::time::{Duration, Instant};

use super::eval::parse_and_evaluate;

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
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Oracle (descente récursive) ------------------------ */

/// expr := terme (('+'|'-') terme)*
/// terme := facteur (('*'|'/') facteur)*
/// facteur := nombre | '(' expr ')'
///
/// Ne lit que ce que `gen_expr` produit (blancs = espaces).
struct Oracle<'a> {
    c: &'a [u8],
    i: usize,
}

impl Oracle<'_> {
    fn eval(s: &str) -> Option<f64> {
        let mut o = Oracle {
            c: s.as_bytes(),
            i: 0,
        };
        let v = o.expr()?;
        assert_eq!(o.voir(), None, "oracle: reste non lu dans {s:?}");
        Some(v).filter(|v| !v.is_nan())
    }

    fn voir(&mut self) -> Option<u8> {
        while self.c.get(self.i) == Some(&b' ') {
            self.i += 1;
        }
        self.c.get(self.i).copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut v = self.terme()?;
        while let Some(op @ (b'+' | b'-')) = self.voir() {
            self.i += 1;
            let d = self.terme()?;
            v = if op == b'+' { v + d } else { v - d };
        }
        Some(v)
    }

    fn terme(&mut self) -> Option<f64> {
        let mut v = self.facteur()?;
        while let Some(op @ (b'*' | b'/')) = self.voir() {
            self.i += 1;
            let d = self.facteur()?;
            if op == b'*' {
                v *= d;
            } else {
                if d == 0.0 {
                    return None;
                }
                v /= d;
            }
        }
        Some(v)
    }

    fn facteur(&mut self) -> Option<f64> {
        if self.voir() == Some(b'(') {
            self.i += 1;
            let v = self.expr()?;
            assert_eq!(self.voir(), Some(b')'), "oracle: ')' attendue");
            self.i += 1;
            return Some(v);
        }
        let debut = self.i;
        while self
            .c
            .get(self.i)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
        {
            self.i += 1;
        }
        let txt = std::str::from_utf8(&self.c[debut..self.i]).ok()?;
        Some(txt.parse().unwrap_or_else(|e| panic!("oracle: {txt:?} {e}")))
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour tester la division par zéro)
    let n = rng.pick(10);
    match rng.pick(4) {
        0 => format!("{n}.{}", rng.pick(100)),
        1 => format!("{}{n}", rng.pick(9) + 1),
        _ => format!("{n}"),
    }
}

fn blanc(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "",
        1 => "  ",
        _ => " ",
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

fn gen_atome(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(3) != 0 {
        gen_nombre(rng)
    } else {
        let b1 = blanc(rng);
        let b2 = blanc(rng);
        format!("({b1}{}{b2})", gen_expr(rng, depth - 1))
    }
}

/// Chaîne plate a op b op c … : c’est là que la précédence travaille.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let n = 1 + rng.pick(5);
    let mut s = gen_atome(rng, depth);
    for _ in 0..n {
        let b1 = blanc(rng);
        let b2 = blanc(rng);
        let op = gen_op(rng);
        let atome = gen_atome(rng, depth);
        s.push_str(&format!("{b1}{op}{b2}{atome}"));
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_pipeline_egal_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_none = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let attendu = Oracle::eval(&expr);
        let obtenu = parse_and_evaluate(&expr);

        assert_eq!(obtenu, attendu, "expr={expr:?}");

        if obtenu.is_some() {
            seen_ok += 1;
        } else {
            seen_none += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_none > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = a.clone();

    for _ in 0..100 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 2);
        let eb = gen_expr(&mut b, 2);
        assert_eq!(ea, eb);
        assert_eq!(parse_and_evaluate(&ea), parse_and_evaluate(&eb), "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_troncatures_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..60 {
        budget(t0, max);

        // Préfixes d’une expression valide : parenthèses ouvertes, opérateur final…
        let expr = gen_expr(&mut rng, 3);
        for (i, _) in expr.char_indices() {
            let _ = parse_and_evaluate(&expr[..i]);
        }
        if rng.coin() {
            let _ = parse_and_evaluate(&format!("{expr})"));
        }
    }
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 1 + 1 + … (2000 termes), plus parenthèses imbriquées profondes
    let somme = vec!["1"; 2000].join(" + ");
    let imbrique = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    budget(t0, max);

    assert_eq!(parse_and_evaluate(&somme), Some(2000.0));
    assert_eq!(parse_and_evaluate(&imbrique), Some(1.0));
    budget(t0, max);
}
