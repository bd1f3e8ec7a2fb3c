//! Error type for rule construction.

use thiserror::Error;

/// A highlight rule could not be built.
///
/// This only happens while a rule set is being assembled; once a
/// [`Tokenizer`](crate::Tokenizer) exists, classification cannot fail.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The pattern is not a valid regular expression.
    #[error("invalid highlight pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The pattern matches the empty string.
    #[error("highlight pattern `{0}` matches the empty string")]
    EmptyMatch(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RuleError>;
