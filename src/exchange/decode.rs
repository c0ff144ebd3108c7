//! Response decoding with error-envelope detection
//!
//! Exchanges frequently answer `200 OK` with a body like `{"error": "..."}`,
//! so the envelope is checked before the real payload is decoded.

use super::{ExchangeError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response body into `T`.
///
/// A non-empty `error` member (key matched ignoring case) on a top-level
/// object fails with [`ExchangeError::Remote`], whatever else the body
/// contains.
pub fn decode<T: DeserializeOwned>(body: Vec<u8>) -> Result<T> {
    let value: Value = serde_json::from_slice(&body)?;

    if let Some(message) = error_message(&value) {
        return Err(ExchangeError::Remote(message));
    }

    Ok(serde_json::from_value(value)?)
}

/// Extract the error message from an envelope, if any
fn error_message(value: &Value) -> Option<String> {
    let error = value
        .as_object()?
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("error"))
        .map(|(_, v)| v)?;

    match error {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
