// src/core/html.rs
// Small helpers over `scraper`'s DOM for table scraping.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Visible text of an element: tags dropped, whitespace collapsed, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let joined: String = el.text().collect();
    normalize_ws(&joined)
}

/// True if `el` has at least one descendant matching `sel`.
pub fn contains(el: ElementRef<'_>, sel: &Selector) -> bool {
    el.select(sel).next().is_some()
}
