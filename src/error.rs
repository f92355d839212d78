//! Error types for the Hashigo library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`HashigoError`] enum. Search itself reports "no path" through an empty
//! result sequence, never through an error; errors are reserved for genuine
//! failures such as I/O problems while loading a lexicon or an explicit
//! cancellation of an in-flight search.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Hashigo operations.
#[derive(Error, Debug)]
pub enum HashigoError {
    /// I/O errors (lexicon file loading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Alphabet-related errors
    #[error("Alphabet error: {0}")]
    Alphabet(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with HashigoError.
pub type Result<T> = std::result::Result<T, HashigoError>;

impl HashigoError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        HashigoError::Lexicon(msg.into())
    }

    /// Create a new alphabet error.
    pub fn alphabet<S: Into<String>>(msg: S) -> Self {
        HashigoError::Alphabet(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        HashigoError::OperationCancelled(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        HashigoError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HashigoError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = HashigoError::lexicon("Test lexicon error");
        assert_eq!(error.to_string(), "Lexicon error: Test lexicon error");

        let error = HashigoError::cancelled("Test cancellation");
        assert_eq!(error.to_string(), "Operation cancelled: Test cancellation");

        let error = HashigoError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let hashigo_error = HashigoError::from(io_error);

        match hashigo_error {
            HashigoError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
