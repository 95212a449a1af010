//! Settings-related errors.

use thiserror::Error;

/// Errors that can occur while loading, validating or saving console settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Settings file not found at expected path
    #[error("Settings not found: {path}")]
    NotFound {
        /// Filesystem path where settings were expected
        path: String,
    },

    /// Settings file parse error
    #[error("Settings parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// Settings validation error (invalid values)
    #[error("Settings validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Settings write error (permission denied, disk full, etc)
    #[error("Settings write error: {message}")]
    WriteError {
        /// Description of the write failure
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Create a write error from an IO error.
    pub fn from_io_error(e: &std::io::Error) -> Self {
        Self::WriteError { message: e.to_string() }
    }

    /// Create a validation error for a named field.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError { field: field.to_string(), message: message.into() }
    }
}
