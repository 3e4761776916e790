//! Structural validation of raw backend replies.
//!
//! Each mode requires a fixed set of top-level keys with fixed types and
//! nothing more: coordinate ranges and deep geometry are deliberately not
//! re-checked here. A failed check feeds the pipeline's fallback path as an
//! invalid response.

use serde_json::Value;
use thiserror::Error;

use crate::mode::AssistMode;

/// A structural schema violation in a backend reply.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required top-level key is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required key holds a value of the wrong type.
    #[error("field `{field}` must be {expected}")]
    WrongType {
        /// Offending field name.
        field: &'static str,
        /// Required JSON type.
        expected: &'static str,
    },
}

/// Validate a parsed reply against the shape required by `mode`.
///
/// # Errors
///
/// Returns a [`SchemaError`] naming the first missing or mistyped field.
pub fn validate(mode: AssistMode, reply: &Value) -> Result<(), SchemaError> {
    match mode {
        AssistMode::Synthesize | AssistMode::Beautify | AssistMode::Style => {
            require(reply, "objects", "an array", Value::is_array)
        }
        AssistMode::Complete => {
            require(reply, "object", "an object", Value::is_object)?;
            require(reply, "complete", "a boolean", Value::is_boolean)?;
            require(reply, "confidence", "a number", Value::is_number)
        }
        AssistMode::Recognize => {
            require(reply, "label", "a string", Value::is_string)?;
            require(reply, "confidence", "a number", Value::is_number)
        }
    }
}

fn require(
    reply: &Value,
    field: &'static str,
    expected: &'static str,
    check: impl Fn(&Value) -> bool,
) -> Result<(), SchemaError> {
    let value = reply.get(field).ok_or(SchemaError::MissingField(field))?;
    if check(value) {
        Ok(())
    } else {
        Err(SchemaError::WrongType { field, expected })
    }
}
