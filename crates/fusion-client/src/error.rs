//! Error types for the Fusion client.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the backend.
///
/// Every variant collapses into one failure shape for callers: a message plus
/// an optional HTTP status and raw error body. Nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout or a broken response stream.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Human-readable summary.
        message: String,
        /// Error body, decoded when it was JSON.
        body: Option<Value>,
    },

    /// The relay channel reported a failure or is gone.
    #[error("{message}")]
    Relay {
        /// Error text reported by the relay.
        message: String,
        /// HTTP status seen by the relay, if any.
        status: Option<u16>,
        /// Error body seen by the relay, if any.
        body: Option<Value>,
    },

    /// A successful body did not match the expected payload shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Serialize(String),
}

impl ClientError {
    /// HTTP status code, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Relay { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw error body, when the failure carried one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Http { body, .. } | Self::Relay { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Human-readable message suitable for display.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn relay(message: impl Into<String>) -> Self {
        Self::Relay { message: message.into(), status: None, body: None }
    }
}
