//! Calculatrice postfixe : noyau réutilisable
//!
//! Expression infixe (`+ - * /`, parenthèses, réels) -> jetons -> RPN -> valeur.
//! Fonctions pures, sans état partagé : appelables depuis n’importe quel thread.
//!
//! ```
//! use calculatrice_postfixe::noyau::{parse_and_evaluate, reponse_texte};
//!
//! assert_eq!(parse_and_evaluate("1- (10/5)* 2 +7"), Some(4.0));
//! assert_eq!(parse_and_evaluate("5 / 0"), None);
//! assert_eq!(reponse_texte("1 / 2").as_deref(), Some("0.5"));
//! ```

pub mod noyau;
