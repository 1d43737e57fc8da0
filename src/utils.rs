//! Shared text helpers.

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for analytics key derivation
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9 ]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Derive the analytics payload key for a slider display label:
/// lower-case it, drop every character that is not a lowercase letter,
/// digit, or space, then collapse each whitespace run into a single
/// underscore.
///
/// `"Price Range (k)"` becomes `price_range_k`, `"Square Feet"`
/// becomes `square_feet`.
pub fn analytics_key(label: &str) -> String {
    let lowered = label.to_lowercase();
    let stripped = DISALLOWED_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(stripped.trim(), "_").into_owned()
}
