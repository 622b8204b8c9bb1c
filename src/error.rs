//! Error types for sortviz operations.
//!
//! Generation, decoration and layout are total and never fail. Errors only
//! arise at the edges: parsing identifiers, loading configuration, seeking a
//! session and serializing state sequences.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sortviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file not found or unreadable.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Algorithm identifier not present in the registry.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Seek past the end of a state sequence.
    #[error("state index {index} out of bounds for {len} states")]
    StateIndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of states in the sequence.
        len: usize,
    },

    /// Serialization of a state sequence failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
