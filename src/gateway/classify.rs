//! Detects documents in which the producer reports its own failure

use serde_json::Value;

/// Message used when a failed document carries no `errorMessage`
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A well-formed document that says the scrape itself failed
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerFailure {
    /// The producer's `errorMessage`, or [`UNKNOWN_ERROR`]
    pub message: Value,
}

/// Loose truthiness: null, false, zero, and empty strings/arrays/objects are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Inspect a loaded document for a producer-signaled failure.
///
/// Only objects can carry the `error` flag; any other JSON value is a
/// success payload.
pub fn producer_failure(document: &Value) -> Option<ProducerFailure> {
    let object = document.as_object()?;

    if !object.get("error").is_some_and(is_truthy) {
        return None;
    }

    let message = object
        .get("errorMessage")
        .cloned()
        .unwrap_or_else(|| Value::String(UNKNOWN_ERROR.to_string()));

    Some(ProducerFailure { message })
}
