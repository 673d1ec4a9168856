//! Error types for word-location extraction.

use thiserror::Error;

/// Primary error type for extraction runs.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document is encrypted and the supplied (or empty default)
    /// password was rejected. Reported to the user and never retried.
    #[error("document is encrypted with a password")]
    InvalidPassword,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other document-level load/parse failure. Propagated without
    /// recovery; already-streamed output is not retracted.
    #[error("syntax error: {0}")]
    SyntaxError(String),
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;
