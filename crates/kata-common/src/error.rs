//! Argument validation errors shared by the kata modules.

use thiserror::Error;

/// An input outside the domain a function is defined on.
///
/// The katas are total over their natural inputs; this covers the edges the
/// exercises leave open, such as an empty path list or matrices whose inner
/// dimensions disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument `{argument}`: {reason}")]
pub struct InvalidArgument {
    /// Name of the offending parameter.
    pub argument: &'static str,
    /// Human-readable explanation.
    pub reason: String,
}

impl InvalidArgument {
    /// Build an error for `argument` with the given reason.
    #[must_use]
    pub fn new(argument: &'static str, reason: impl Into<String>) -> Self {
        Self {
            argument,
            reason: reason.into(),
        }
    }
}
