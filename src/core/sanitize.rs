// src/core/sanitize.rs

use crate::config::consts::{MAX_COLSPAN, MAX_ROWSPAN};

/// Decode HTML character references in one pass, with the full HTML5
/// entity table. Legacy names decode without their `;` (`&amp` is `&`),
/// `&#0;` becomes U+FFFD, and `&amp;lt;` becomes `&lt;`, not `<`.
pub fn decode_entities(s: &str) -> String {
    htmlize::unescape(s).into_owned()
}

/// Collapse whitespace runs into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Leading-digit parse of a `rowspan`/`colspan` value.
/// Missing, non-numeric and zero all mean 1.
fn parse_span(raw: Option<&str>, max: usize) -> usize {
    let Some(raw) = raw else { return 1 };
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n.min(max),
    }
}

pub fn parse_colspan(raw: Option<&str>) -> usize {
    parse_span(raw, MAX_COLSPAN)
}

pub fn parse_rowspan(raw: Option<&str>) -> usize {
    parse_span(raw, MAX_ROWSPAN)
}
