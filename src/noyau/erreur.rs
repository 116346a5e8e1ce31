// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du pipeline, une variante par cause.
///
/// Chaque étage (jetons, rpn, éval) rend sa propre variante ; seule
/// l'orchestration publique les écrase en `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("parenthèses non appariées")]
    ParenthesesDesequilibrees,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: \"{0}\"")]
    NombreInvalide(String),

    #[error("expression vide")]
    ExpressionVide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérande manquante pour '{operateur}'")]
    PileInsuffisante { operateur: char },

    #[error("jeton inattendu en RPN: {0}")]
    JetonInattendu(String),

    #[error("{restants} opérande(s) sans opérateur")]
    OperandesEnTrop { restants: usize },

    #[error("résultat non numérique")]
    ResultatNonNumerique,
}

pub type Resultat<T> = std::result::Result<T, ErreurCalcul>;
