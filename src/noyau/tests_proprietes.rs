//! Propriétés (proptest) : blancs, bruit, idempotence, jamais de panique.

use proptest::prelude::*;

use super::eval::{parse_and_evaluate, parse_and_evaluate_avec};
use super::regles::Regles;

/// n nombres + (n - 1) opérateurs, sans parenthèses.
fn arb_chaine() -> impl Strategy<Value = (Vec<u32>, Vec<char>)> {
    (1usize..8).prop_flat_map(|n| {
        (
            proptest::collection::vec(0u32..1000, n),
            proptest::collection::vec(proptest::sample::select(vec!['+', '-', '*', '/']), n - 1),
        )
    })
}

fn assembler(nombres: &[u32], ops: &[char], sep: &str) -> String {
    let mut s = nombres[0].to_string();
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        s.push_str(&format!("{sep}{op}{sep}{n}"));
    }
    s
}

proptest::proptest! {
    #[test]
    fn blancs_sans_effet((nombres, ops) in arb_chaine(), sep in "[ \t]{1,3}") {
        let compact = assembler(&nombres, &ops, "");
        let aere = format!("{sep}{}{sep}", assembler(&nombres, &ops, &sep));
        prop_assert_eq!(parse_and_evaluate(&compact), parse_and_evaluate(&aere));
    }

    #[test]
    fn bruit_ignore_entre_jetons((nombres, ops) in arb_chaine(), bruit in "[a-z#_]{1,3}") {
        let propre = assembler(&nombres, &ops, "");
        let bruite = assembler(&nombres, &ops, &bruit);
        prop_assert_eq!(parse_and_evaluate(&propre), parse_and_evaluate(&bruite));

        // en règles strictes, le bruit est refusé
        if !ops.is_empty() {
            prop_assert_eq!(parse_and_evaluate_avec(&bruite, &Regles::strictes()), None);
        }
    }

    #[test]
    fn parentheses_englobantes_neutres((nombres, ops) in arb_chaine()) {
        let s = assembler(&nombres, &ops, " ");
        prop_assert_eq!(parse_and_evaluate(&s), parse_and_evaluate(&format!("({s})")));
    }

    #[test]
    fn idempotence(s in "\\PC{0,40}") {
        prop_assert_eq!(parse_and_evaluate(&s), parse_and_evaluate(&s));
    }

    #[test]
    fn jamais_de_panique(s in "[0-9.+\\-*/() a-z]{0,60}") {
        let _ = parse_and_evaluate(&s);
        let _ = parse_and_evaluate_avec(&s, &Regles::strictes());
    }
}
