//! Request decoding: raw body text to a token sequence.
//!
//! The decoder accepts the wire shape `{"data": [...]}` as well as a bare
//! top-level array, and feeds the result to the classifier. Whatever goes
//! wrong, the caller always gets a well-formed envelope back: decode and
//! shape failures become `is_success: false` payloads, never a crash.

use serde_json::Value;

use crate::classifier::classify;
use crate::config::Config;
use crate::response::ResponsePayload;

/// Errors turning a raw request body into a token sequence.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid JSON request body.")]
    InvalidJson(#[source] serde_json::Error),

    #[error(r#"Invalid body. Expected {{ "data": [...] }}"#)]
    MissingData,
}

/// Extracts the token sequence value from a raw request body.
///
/// An object must carry a `data` field; any other top-level value passes
/// through as-is (the classifier still rejects non-arrays).
pub fn decode_request(raw: &str) -> Result<Value, DecodeError> {
    let body: Value = serde_json::from_str(raw).map_err(DecodeError::InvalidJson)?;
    match body {
        Value::Object(mut map) => map.remove("data").ok_or(DecodeError::MissingData),
        other => Ok(other),
    }
}

/// Full request-to-envelope pipeline: decode, classify, wrap.
pub fn respond(identity: &Config, raw: &str) -> ResponsePayload {
    let tokens = match decode_request(raw) {
        Ok(tokens) => tokens,
        Err(err) => return ResponsePayload::failure(identity, err.to_string()),
    };
    match classify(&tokens) {
        Ok(result) => ResponsePayload::success(identity, result),
        // Non-array payloads get the same wire message as a missing field.
        Err(_) => ResponsePayload::failure(identity, DecodeError::MissingData.to_string()),
    }
}
