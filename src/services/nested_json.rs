//! Decoding for embedded JSON columns.
//!
//! Upstream stores `course_module` and `testimonies` as JSON, but sometimes sends the
//! array itself and sometimes a JSON string whose contents are the array.

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NestedJsonError {
    #[error("field is empty")]
    Empty,

    #[error("string holds no array")]
    EmptyString,

    #[error("neither an array nor a string: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("string does not hold an array: {0}")]
    Inner(#[source] serde_json::Error),
}

/// First phase: the raw bytes are the array.
pub fn decode_array<T: DeserializeOwned>(raw: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_slice(raw)
}

/// Second phase: the raw bytes are a JSON string whose text is the array.
pub fn decode_string_wrapped<T: DeserializeOwned>(raw: &[u8]) -> Result<Vec<T>, NestedJsonError> {
    let inner: String = serde_json::from_slice(raw).map_err(NestedJsonError::Shape)?;
    if inner.is_empty() {
        return Err(NestedJsonError::EmptyString);
    }
    decode_array(inner.as_bytes()).map_err(NestedJsonError::Inner)
}

/// Tries both phases in order.
pub fn try_decode<T: DeserializeOwned>(raw: &[u8]) -> Result<Vec<T>, NestedJsonError> {
    if raw.is_empty() {
        return Err(NestedJsonError::Empty);
    }
    match decode_array(raw) {
        Ok(items) => Ok(items),
        Err(_) => decode_string_wrapped(raw),
    }
}

/// Never fails: anything undecodable is logged and read as an empty list, so one bad
/// column does not take the rest of the course down with it. Only empty raw input is
/// read as empty without a warning.
pub fn decode<T: DeserializeOwned>(field: &str, raw: &[u8]) -> Vec<T> {
    match try_decode(raw) {
        Ok(items) => items,
        Err(NestedJsonError::Empty) => Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to parse {} JSON: {}", field, e);
            Vec::new()
        }
    }
}

/// [`decode`] for an optional column as it sits on [`crate::models::Course`].
pub fn decode_field<T: DeserializeOwned>(field: &str, raw: Option<&RawValue>) -> Vec<T> {
    match raw {
        Some(raw) => decode(field, raw.get().as_bytes()),
        None => Vec::new(),
    }
}
