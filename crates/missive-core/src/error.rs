//! Error types for the composer library.
//!
//! The formatter itself never fails; these errors come from the edges around
//! it: the clipboard, the configuration file and its location.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all fallible composer operations.
#[derive(Error, Debug)]
pub enum ComposerError {
    /// The clipboard backend refused or failed the write
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ComposerError {
        ComposerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ComposerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a clipboard error from any displayable backend failure.
    pub fn clipboard(message: impl std::fmt::Display) -> Self {
        Self::Clipboard {
            message: message.to_string(),
        }
    }
}

/// Result type alias for composer operations
pub type Result<T> = std::result::Result<T, ComposerError>;
