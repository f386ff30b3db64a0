//! Error types for the NYC Open Data library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog and code generation operations.
#[derive(Debug, Error)]
pub enum NycError {
    /// A raw catalog record does not match the dataset shape.
    #[error("Invalid dataset record: {0}")]
    Validation(String),

    /// A name could not be turned into a valid identifier.
    #[error("Could not sanitize '{name}' into an identifier (best attempt: '{attempt}')")]
    Sanitization { name: String, attempt: String },

    /// The catalog could not be fetched.
    #[error("Catalog source unavailable: {0}")]
    SourceUnavailable(String),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NycError {
    /// Build an IO error for the given path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NycError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, NycError>;
