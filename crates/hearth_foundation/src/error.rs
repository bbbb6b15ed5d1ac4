//! Error types for the Hearth system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for Hearth operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown-kind error (corrupt persisted state).
    #[must_use]
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownKind(name.into()))
    }

    /// Creates an I/O error tagged with the offending path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: source.to_string(),
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a timestamp parse error.
    #[must_use]
    pub fn timestamp(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timestamp(value.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A persisted entry referenced a kind the schema registry does not know.
    #[error("unknown kind in persisted state: {0}")]
    UnknownKind(String),

    /// Failure reading or writing the storage file.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The file path involved.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A timestamp string did not match the ISO-8601 format.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
