// src/noyau/jetons.rs

use log::trace;

use super::erreur::{ErreurCalcul, Resultat};
use super::regles::Regles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    /// Tous associatifs à gauche.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
    ParG,
    ParD,
}

/// Tokenize avec les règles par défaut.
pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    tokenize_avec(s, &Regles::default())
}

/// Tokenize une chaîne en jetons.
/// - chiffres et '.' s'accumulent dans un tampon numérique
/// - tout autre caractère vide d'abord le tampon ("1 2" => deux nombres)
/// - + - * / ( ) deviennent des jetons, le reste est ignoré (sauf règle stricte)
/// - profondeur de parenthèses jamais négative, nulle à la fin
pub fn tokenize_avec(s: &str, regles: &Regles) -> Resultat<Vec<Jeton>> {
    let mut out = Vec::new();
    let mut tampon = String::new();
    let mut profondeur: usize = 0;

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            tampon.push(c);
            continue;
        }

        vider_tampon(&mut tampon, &mut out, regles)?;

        match c {
            '(' => {
                profondeur += 1;
                out.push(Jeton::ParG);
            }
            ')' => {
                profondeur = profondeur
                    .checked_sub(1)
                    .ok_or(ErreurCalcul::ParenthesesDesequilibrees)?;
                out.push(Jeton::ParD);
            }
            _ => match Operateur::depuis_char(c) {
                Some(op) => out.push(Jeton::Op(op)),
                None if regles.rejeter_caracteres_inconnus && !c.is_whitespace() => {
                    return Err(ErreurCalcul::CaractereInattendu(c));
                }
                None => {
                    if !c.is_whitespace() {
                        trace!("caractère ignoré: {c:?}");
                    }
                }
            },
        }
    }

    if profondeur != 0 {
        return Err(ErreurCalcul::ParenthesesDesequilibrees);
    }
    vider_tampon(&mut tampon, &mut out, regles)?;

    Ok(out)
}

fn vider_tampon(tampon: &mut String, out: &mut Vec<Jeton>, regles: &Regles) -> Resultat<()> {
    if tampon.is_empty() {
        return Ok(());
    }
    let n = lire_nombre(tampon, regles)?;
    out.push(Jeton::Nombre(n));
    tampon.clear();
    Ok(())
}

/// Littéral décimal -> f64.
/// Permissif : on garde le plus long préfixe valide (coupure au second '.') ;
/// un préfixe sans aucun chiffre (".", "..5") donne NaN.
/// Strict : l’un ou l’autre cas est refusé.
fn lire_nombre(tampon: &str, regles: &Regles) -> Resultat<f64> {
    let invalide = || ErreurCalcul::NombreInvalide(tampon.to_string());

    let fin = match tampon.match_indices('.').nth(1) {
        Some(_) if regles.rejeter_nombres_malformes => return Err(invalide()),
        Some((i, _)) => i,
        None => tampon.len(),
    };
    let prefixe = &tampon[..fin];

    if !prefixe.bytes().any(|b| b.is_ascii_digit()) {
        if regles.rejeter_nombres_malformes {
            return Err(invalide());
        }
        trace!("littéral sans chiffre {tampon:?} -> NaN");
        return Ok(f64::NAN);
    }

    prefixe.parse::<f64>().map_err(|_| invalide())
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|t| match t {
            Jeton::Nombre(n) => format!("{n}"),
            Jeton::Op(op) => op.symbole().to_string(),
            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
