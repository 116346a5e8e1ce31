// src/noyau/format.rs

/// f64 -> texte de réponse, au format attendu par les appelants :
/// - plus courte écriture décimale exacte ("4", "0.5", "0.30000000000000004")
/// - "0" pour -0
/// - exposant signé hors [1e-6, 1e21) ("1e+21", "1.5e-7")
/// - "Infinity" / "-Infinity" / "NaN"
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }

    format!("{v}")
}
