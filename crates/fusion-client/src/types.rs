use std::time::Duration;

use fusion_types::models::DEFAULT_API_BASE_URL;

/// Per-call timeout enforced by whichever side performs the network I/O.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Fusion client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Initial base URL of the backend.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Default::default() }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}
