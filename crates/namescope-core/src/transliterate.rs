//! Dialect-independent cleanup of raw source names.
//!
//! [`strip_accents`] only removes diacritics; [`transform_standard_naming`]
//! additionally rewrites every character that is not legal in a bare
//! identifier. Neither changes case.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Removes diacritics from Latin letters.
///
/// Each character is canonically decomposed and its combining marks dropped.
/// When the remaining base is plain ASCII it replaces the character (`é` ->
/// `e`); otherwise the original character is kept untouched, so a later
/// substitution turns it into exactly one replacement character. A standalone
/// combining mark is dropped only when it follows an ASCII letter; vowel signs
/// of other scripts are kept as characters of their own. Spaces and
/// punctuation pass through.
pub fn strip_accents(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        if is_combining_mark(ch) {
            if !out.chars().next_back().is_some_and(|c| c.is_ascii_alphabetic()) {
                out.push(ch);
            }
            continue;
        }

        let mut base = String::new();
        decompose_canonical(ch, |c| {
            if !is_combining_mark(c) {
                base.push(c);
            }
        });

        if !base.is_empty() && base.is_ascii() {
            out.push_str(&base);
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rewrites a raw name into `[A-Za-z0-9_]*`.
///
/// Surrounding whitespace is trimmed, accents are stripped, runs of inner
/// whitespace become one `_` and every other illegal character becomes `_`.
/// Leading digits are left alone.
pub fn transform_standard_naming(input: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    static ILLEGAL: OnceLock<Regex> = OnceLock::new();
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex pattern"));
    let illegal =
        ILLEGAL.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_]").expect("Invalid regex pattern"));

    let result = strip_accents(input.trim());
    let result = whitespace.replace_all(&result, "_");
    illegal.replace_all(&result, "_").into_owned()
}

/// Replaces quote characters so a name can sit inside a string literal of a
/// JSON path expression.
pub fn transform_json_naming(input: &str) -> String {
    input
        .chars()
        .map(|c| if matches!(c, '\'' | '"' | '`') { '_' } else { c })
        .collect()
}

/// Whether `c` may start a bare identifier.
pub(crate) fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Whether `c` may appear in a bare identifier.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
