//! Identifier sanitization.
//!
//! CDS names are dot-separated and may contain characters that are not
//! legal in TypeScript identifiers. Every declaration and field name that
//! ends up in generated output passes through these functions.

/// Converts a raw schema identifier into a valid TypeScript identifier.
///
/// Characters other than letters, ASCII digits, `_` and `$` become `_`, and
/// a leading digit gets a `_` in front. Sanitizing twice gives the same result
/// as sanitizing once.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() + 1);
    for c in raw.chars() {
        if c.is_alphabetic() || c.is_ascii_digit() || c == '_' || c == '$' {
            result.push(c);
        } else {
            result.push('_');
        }
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Returns the local part of a fully qualified schema name.
///
/// Everything up to and including the last `.` is dropped.
#[must_use]
pub fn sanitize_target(raw: &str) -> &str {
    raw.rsplit_once('.').map_or(raw, |(_, local)| local)
}

/// Derives a declaration name from a fully qualified schema name.
#[must_use]
pub fn declaration_name(raw: &str) -> String {
    sanitize_name(sanitize_target(raw))
}

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
