//! Errors for JSON encoding and reconstruction.

use thiserror::Error;

/// Failure to encode a value or rebuild one from JSON text.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The text is not valid JSON, or the value could not be encoded.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Positional reconstruction needs a JSON object at the top level.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// The object has a different number of entries than the type has fields.
    #[error("expected {expected} fields, found {found}")]
    Arity {
        /// Fields the target type takes.
        expected: usize,
        /// Entries present in the object.
        found: usize,
    },

    /// A value could not be converted to the field at this position.
    #[error("field {index}: {source}")]
    Field {
        /// Zero-based position in the object's key order.
        index: usize,
        /// Conversion error for that value.
        source: serde_json::Error,
    },
}
