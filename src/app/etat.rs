//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, réponse, erreur, démarche,
//! règles, historique) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Pas d’évaluation ni de parsing ici.
//! - Historique borné.

use calculatrice_postfixe::noyau::Regles;

/// Garde-fou : nombre maximal de lignes d’historique.
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Une évaluation passée : réponse texte, ou None si "expression incorrecte".
#[derive(Clone, Debug, PartialEq)]
pub struct Ligne {
    pub expression: String,
    pub reponse: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub reponse: String, // réponse texte ("4", "0.5"…)
    pub erreur: String,  // message générique de l’appelant
    pub detail: String,  // cause précise (étage fautif)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub regles: Regles,

    pub historique: Vec<Ligne>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            reponse: String::new(),
            erreur: String::new(),
            detail: String::new(),
            demarche: Demarche::default(),
            regles: Regles::default(),
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique + règles par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.regles = Regles::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer réponse + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.reponse.clear();
        self.erreur.clear();
        self.detail.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Échec : un seul message pour l’utilisateur, la cause en second.
    /// La réponse précédente est effacée (elle ne correspond plus à l’entrée).
    pub fn set_erreur(&mut self, expression: &str, detail: impl Into<String>) {
        self.reponse.clear();
        self.demarche = Demarche::default();
        self.erreur = format!("Expression incorrecte ({expression}) !");
        self.detail = detail.into();
        self.pousser_historique(expression, None);
        self.focus_entree = true;
    }

    pub fn set_reponse(&mut self, expression: &str, reponse: String, demarche: Demarche) {
        self.erreur.clear();
        self.detail.clear();
        self.pousser_historique(expression, Some(reponse.clone()));
        self.reponse = reponse;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Recharge une ligne d’historique dans l’entrée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(l) = self.historique.get(index) {
            self.entree = l.expression.clone();
        }
        self.focus_entree = true;
    }

    fn pousser_historique(&mut self, expression: &str, reponse: Option<String>) {
        self.historique.insert(
            0,
            Ligne {
                expression: expression.to_string(),
                reponse,
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
