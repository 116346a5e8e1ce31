//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> f64
//!
//! Deux niveaux :
//! - `evaluer_detail` garde l’erreur typée de l’étage fautif + la démarche ;
//! - `parse_and_evaluate` écrase tout échec en `None` (contrat des appelants).

use log::{debug, warn};
use num_traits::Zero;

use super::erreur::{ErreurCalcul, Resultat};
use super::format::format_nombre;
use super::jetons::{format_jetons, tokenize_avec, Jeton, Operateur};
use super::regles::Regles;
use super::rpn::to_rpn;

/// Résultat détaillé d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub jetons: Vec<Jeton>,
    pub rpn: Vec<Jeton>,
}

/// API publique : valeur ou rien, règles par défaut.
pub fn parse_and_evaluate(expr_str: &str) -> Option<f64> {
    parse_and_evaluate_avec(expr_str, &Regles::default())
}

pub fn parse_and_evaluate_avec(expr_str: &str, regles: &Regles) -> Option<f64> {
    match evaluer_detail(expr_str, regles) {
        Ok(ev) => Some(ev.valeur),
        Err(e) => {
            debug!("évaluation refusée pour {expr_str:?}: {e}");
            None
        }
    }
}

/// Réponse texte telle que l’appelant la stocke ("4", "0.5", "Infinity"…).
pub fn reponse_texte(expr_str: &str) -> Option<String> {
    parse_and_evaluate(expr_str).map(format_nombre)
}

/// Pipeline complet avec erreur typée par étage.
pub fn evaluer_detail(expr_str: &str, regles: &Regles) -> Resultat<Evaluation> {
    // 1) Jetons
    let jetons = tokenize_avec(expr_str, regles)?;
    debug!("jetons: {}", format_jetons(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons);
    debug!("rpn: {}", format_jetons(&rpn));

    // 3) Pile
    let valeur = evaluer_postfixe_avec(&rpn, regles)?;
    if valeur.is_nan() {
        return Err(ErreurCalcul::ResultatNonNumerique);
    }

    Ok(Evaluation {
        valeur,
        jetons,
        rpn,
    })
}

/// Évalue une RPN avec les règles par défaut.
pub fn evaluer_postfixe(rpn: &[Jeton]) -> Resultat<f64> {
    evaluer_postfixe_avec(rpn, &Regles::default())
}

/// Évalue une RPN sur une pile de valeurs.
/// Opérateur : dépile b puis a (b = opérande droite), empile a op b.
pub fn evaluer_postfixe_avec(rpn: &[Jeton], regles: &Regles) -> Resultat<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Jeton::Nombre(n) => pile.push(n),

            Jeton::Op(op) => {
                let manquante = || ErreurCalcul::PileInsuffisante {
                    operateur: op.symbole(),
                };
                let b = pile.pop().ok_or_else(manquante)?;
                let a = pile.pop().ok_or_else(manquante)?;
                pile.push(appliquer(op, a, b)?);
            }

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurCalcul::JetonInattendu(format_jetons(&[*tok])));
            }
        }
    }

    let sommet = pile.pop().ok_or(ErreurCalcul::ExpressionVide)?;

    if !pile.is_empty() {
        if regles.rejeter_operandes_en_trop {
            return Err(ErreurCalcul::OperandesEnTrop {
                restants: pile.len(),
            });
        }
        // laxisme documenté : seul le sommet compte
        warn!("{} opérande(s) ignorée(s) sous le sommet", pile.len());
    }

    Ok(sommet)
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Resultat<f64> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            // -0.0 compte aussi
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
    })
}
