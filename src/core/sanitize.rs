// src/core/sanitize.rs

use crate::config::consts::CURRENCY_ARTIFACT;

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Turn a raw price cell into a number.
///
/// Accepts things like `"96.72"`, `"₹94.77"`, `"Rs. 96.72"`, `"ƒ,1 96.72"`
/// and `"1,200.50"`. Returns `None` for empty or non-numeric text
/// (`"N/A"`, `"Free"`) and for ambiguous dotted strings like `"1.2.3"`.
///
/// Commas are thousands separators only and are dropped; they never act as
/// a decimal point.
pub fn normalize_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // Must go before the digit filter: the artifact carries a '1'.
    let raw = raw.replace(CURRENCY_ARTIFACT, "");

    let mut cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    // "Rs. 96.72" cleans to ".96.72": a lone leading dot is recoverable,
    // anything else with several dots is not.
    if cleaned.matches('.').count() > 1 {
        if cleaned.starts_with('.') && cleaned[1..].matches('.').count() == 1 {
            cleaned = cleaned.trim_start_matches('.').to_string();
        } else {
            return None;
        }
    }

    if cleaned.is_empty() {
        return None;
    }

    // long digit runs overflow to inf
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
