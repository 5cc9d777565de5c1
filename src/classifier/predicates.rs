//! Character-class predicates for token classification.
//!
//! The classification rules are regex-shaped (`^-?\d+$`, `^[A-Za-z]+$`,
//! `[^A-Za-z0-9]`) but implemented as single-pass character scans, which
//! keeps the crate free of a pattern-matching dependency at equivalent cost.

/// Returns true if `s` is an optionally `-`-signed run of ASCII digits.
///
/// This is the full integer-token test: an explicit leading `+` does NOT
/// match, so `"+5"` classifies as a special token instead. That asymmetry
/// is intentional and matches the wire contract.
pub fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is one or more ASCII letters and nothing else.
pub fn is_pure_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns true if `s` contains at least one character outside `[A-Za-z0-9]`.
///
/// Non-ASCII characters count as special: the alphanumeric window is
/// ASCII-only by contract.
pub fn has_non_alphanumeric(s: &str) -> bool {
    s.chars().any(|c| !c.is_ascii_alphanumeric())
}
