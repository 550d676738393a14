//! Error types for expander construction.

use thiserror::Error;

/// Errors raised while building an expander.
///
/// Running out of combinations is not an error: iteration signals normal
/// exhaustion by returning `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The root value is not a mapping or sequence. Scalars, text, and
    /// tuples cannot anchor an expansion.
    #[error("cannot expand a {kind} root: expected a mapping or sequence")]
    InvalidRoot {
        /// Kind name of the rejected value (see [`Value::kind`](crate::Value::kind)).
        kind: &'static str,
    },
}
