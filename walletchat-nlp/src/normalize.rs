//! Message normalization: lowercase, collapse whitespace, strip currency
//! markers.
//!
//! Shorthand magnitude suffixes (k/m/tr) are deliberately left in place;
//! the amount extractor needs them adjacent to the digits.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static CURRENCY_GLYPHS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$€£¥₫đ]").unwrap());
static CURRENCY_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"đồng|vnd|₫").unwrap());

/// Normalize a raw chat message for the downstream classifiers.
///
/// Always succeeds. Steps, in fixed order: lowercase, collapse whitespace
/// runs to a single space and trim, strip currency symbols, strip the
/// literal "đồng"/"vnd"/"₫" tokens.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = WHITESPACE.replace_all(&lowered, " ");
    let stripped = CURRENCY_GLYPHS.replace_all(collapsed.trim(), "");
    CURRENCY_WORDS.replace_all(&stripped, "").into_owned()
}
