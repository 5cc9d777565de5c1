//! Response envelope wrapping a classification result.
//!
//! The wire contract always answers with a well-formed envelope: the
//! identity block plus either the populated collections (`is_success:
//! true`) or empty collections with an `error_message` (`is_success:
//! false`). Failures never surface as a crash or a partial result.

use serde::{Deserialize, Serialize};

use crate::classifier::ClassificationResult;
use crate::config::Config;

/// The full wire envelope for one classification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    /// Decimal text; crosses the wire as a string, never a JSON number.
    pub sum: String,
    pub concat_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ResponsePayload {
    /// Successful envelope carrying the classification result.
    pub fn success(identity: &Config, result: ClassificationResult) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            odd_numbers: result.odd_numbers,
            even_numbers: result.even_numbers,
            alphabets: result.alphabets,
            special_characters: result.special_characters,
            sum: result.sum,
            concat_string: result.concat_string,
            error_message: None,
        }
    }

    /// Failure envelope: empty collections, zero sum, explanatory message.
    pub fn failure(identity: &Config, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            user_id: identity.user_id(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            odd_numbers: Vec::new(),
            even_numbers: Vec::new(),
            alphabets: Vec::new(),
            special_characters: Vec::new(),
            sum: "0".to_string(),
            concat_string: String::new(),
            error_message: Some(message.into()),
        }
    }
}
