// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Règles:
// - + - (1) < * / (2), tous associatifs à gauche : on dépile tant que
//   précédence(sommet) >= précédence(entrant)
// - ')' dépile jusqu’à '(' puis jette '('
// - pas de moins unaire : "-3" reste [-, 3] et échoue à l’évaluation
//
// NOTE:
// - Ne peut pas échouer : l’équilibre des parenthèses est vérifié par tokenize.
//   Une '(' restante (entrée non validée) sort telle quelle et sera refusée
//   par l’évaluateur.

use super::jetons::Jeton;

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [3, +, 4, *, 2]
///   rpn:    [3, 4, 2, *, +]
pub fn to_rpn(tokens: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for &tok in tokens {
        match tok {
            Jeton::Nombre(_) => out.push(tok),

            Jeton::ParG => ops.push(tok),

            Jeton::ParD => {
                while let Some(top) = ops.pop() {
                    if top == Jeton::ParG {
                        break;
                    }
                    out.push(top);
                }
            }

            Jeton::Op(op) => {
                while let Some(&Jeton::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Jeton::Op(top));
                    ops.pop();
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops (ordre de pile)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    out
}
