//! src/noyau/regles.rs
//!
//! Règles d'évaluation (configuration du noyau).
//!
//! Par défaut tout est permissif : c'est le comportement documenté
//! (caractères inconnus ignorés, littéral tronqué au second '.', opérandes
//! en trop écartées). Chaque drapeau durcit un seul point.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Regles {
    /// Refuse tout caractère hors `[0-9.+\-*/()]` et blancs.
    pub rejeter_caracteres_inconnus: bool,

    /// Refuse un littéral à plusieurs points ("1.2.3") ou sans chiffre (".").
    pub rejeter_nombres_malformes: bool,

    /// Refuse une pile finale à plusieurs valeurs ("1 2").
    pub rejeter_operandes_en_trop: bool,
}

impl Regles {
    pub fn strictes() -> Self {
        Self {
            rejeter_caracteres_inconnus: true,
            rejeter_nombres_malformes: true,
            rejeter_operandes_en_trop: true,
        }
    }
}
