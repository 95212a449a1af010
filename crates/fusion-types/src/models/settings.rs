//! Console settings persisted on the operator's machine.

use serde::{Deserialize, Serialize};

use super::enums::{Theme, TransportPreference};

/// Backend address used until the operator changes it.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8888";
/// Polling interval for list views.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5_000;
/// Lower bound accepted for the polling interval.
pub const MIN_REFRESH_INTERVAL_MS: u64 = 500;

/// Operator-facing settings. Never holds domain data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Backend base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Refresh interval for `watch` in milliseconds
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// UI theme
    #[serde(default)]
    pub theme: Theme,
    /// Transport selection
    #[serde(default)]
    pub transport: TransportPreference,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_refresh_interval_ms() -> u64 {
    DEFAULT_REFRESH_INTERVAL_MS
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            refresh_interval_ms: default_refresh_interval_ms(),
            theme: Theme::default(),
            transport: TransportPreference::default(),
        }
    }
}
