//! Generic acknowledgement envelope returned by mutating endpoints.

use serde::{Deserialize, Serialize};

/// `{status, message?, data?}` as returned by add/remove/run/stop endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.status.to_ascii_lowercase().as_str(), "success" | "ok")
    }

    /// Message for display, falling back to the status text.
    pub fn summary(&self) -> &str {
        self.message.as_deref().filter(|m| !m.is_empty()).unwrap_or(&self.status)
    }
}
