//! Deterministic token classification pipeline.
//!
//! Takes a decoded JSON array of arbitrary tokens and partitions them into
//! odd integers, even integers, pure-alphabetic strings, and special
//! strings, while accumulating an integer sum and a derived concat string
//! built from every ASCII letter seen anywhere in the input.
//!
//! The pipeline is a pure single pass over the tokens: no I/O, no shared
//! state, fully determined by the input sequence. The only failure mode is
//! a top-level input that is not an array; individual tokens never fail,
//! they at worst land in no collection at all.

mod predicates;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use predicates::{has_non_alphanumeric, is_integer_literal, is_pure_alphabetic};

/// The structured outcome of classifying one token sequence.
///
/// Entries in `odd_numbers` and `even_numbers` keep the token's original
/// decimal text (a `"007"` stays `"007"` even though it sums as 7), and
/// `sum` is decimal text rather than a JSON number, per the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Integer tokens with odd magnitude, input order preserved.
    pub odd_numbers: Vec<String>,
    /// Integer tokens with even magnitude, input order preserved.
    pub even_numbers: Vec<String>,
    /// Pure-alphabetic tokens, upper-cased, input order preserved.
    pub alphabets: Vec<String>,
    /// Tokens containing at least one non-alphanumeric character, verbatim.
    pub special_characters: Vec<String>,
    /// Decimal text of the signed sum of all integer tokens.
    pub sum: String,
    /// All ASCII letters across all tokens, reversed, alternating-cased.
    pub concat_string: String,
}

/// The single error the classifier can produce: a top-level input that is
/// not a sequence. Detected before any token-level work begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected a JSON array of tokens, got {found}")]
    NotASequence { found: &'static str },
}

/// Classifies a decoded JSON value that must be an array of tokens.
///
/// Each token is converted to its string form and routed, in priority
/// order, to exactly one of: integer (odd/even by `abs % 2`, contributing
/// to `sum`), pure-alphabetic (upper-cased), special (contains a
/// non-alphanumeric character), or unclassified (letter/digit mix such as
/// `"a1"`). Regardless of the route, every ASCII letter in the token feeds
/// the concat-string buffer.
pub fn classify(input: &Value) -> Result<ClassificationResult, ShapeError> {
    let tokens = input.as_array().ok_or(ShapeError::NotASequence {
        found: value_kind(input),
    })?;

    let mut odd_numbers = Vec::new();
    let mut even_numbers = Vec::new();
    let mut alphabets = Vec::new();
    let mut special_characters = Vec::new();
    let mut letters: Vec<char> = Vec::new();
    let mut sum: i128 = 0;

    for token in tokens {
        let text = token_text(token);

        // Letters feed the concat buffer no matter how the token classifies.
        letters.extend(text.chars().filter(char::is_ascii_alphabetic));

        if predicates::is_integer_literal(&text) {
            // Digit runs too long for i128 stay unclassified rather than
            // contribute a wrong sum.
            if let Ok(value) = text.parse::<i128>() {
                sum += value;
                if value.unsigned_abs() % 2 == 0 {
                    even_numbers.push(text);
                } else {
                    odd_numbers.push(text);
                }
            }
        } else if predicates::is_pure_alphabetic(&text) {
            alphabets.push(text.to_ascii_uppercase());
        } else if predicates::has_non_alphanumeric(&text) {
            special_characters.push(text);
        }
        // Remaining tokens are letter/digit mixes; they join no collection.
    }

    Ok(ClassificationResult {
        odd_numbers,
        even_numbers,
        alphabets,
        special_characters,
        sum: sum.to_string(),
        concat_string: concat_string(&letters),
    })
}

/// Converts a token to its canonical string form.
///
/// Strings pass through verbatim; everything else renders as its JSON
/// text (decimal for numbers, `true`/`false`, `null`, compact JSON for
/// nested arrays and objects).
fn token_text(token: &Value) -> String {
    match token {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the concat string: reverse the letter buffer, then re-case by
/// position (index 0 upper, 1 lower, 2 upper, ...).
fn concat_string(letters: &[char]) -> String {
    letters
        .iter()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
