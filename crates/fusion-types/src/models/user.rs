//! User models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::enums::{AmountMode, TradeMode};

/// One KOL followed by a user, as embedded in the user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KolTrackItem {
    /// KOL name
    pub name: String,
    /// Mirror trades in the opposite direction
    #[serde(default)]
    pub is_reverse: bool,
    /// Whether the track process is running
    #[serde(default)]
    pub is_active: bool,
    /// Futures symbols to follow (empty means all)
    #[serde(default)]
    pub futures: Vec<String>,
    /// Position sizing policy
    #[serde(default)]
    pub amount_mode: AmountMode,
    /// Fixed amount per symbol (FIXED mode)
    #[serde(default)]
    pub fixed_amounts: BTreeMap<String, f64>,
    /// Percentage per symbol (PERCENTAGE mode)
    #[serde(default)]
    pub percentages: BTreeMap<String, f64>,
    /// Maximum loss per trade (LOSS_FIXED mode)
    #[serde(default)]
    pub max_loss: Option<f64>,
}

/// A backend user holding exchange API keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub activate: bool,
    #[serde(default)]
    pub gate_api_key: String,
    #[serde(default)]
    pub enable_balance_monitor: bool,
    #[serde(default)]
    pub enable_exporter: bool,
    /// User process is running on the backend
    #[serde(default)]
    pub is_running: bool,
    /// Balance monitor is running on the backend
    #[serde(default)]
    pub is_monitoring: bool,
    #[serde(default)]
    pub balance_rate: Option<f64>,
    #[serde(default)]
    pub min_balance: Option<f64>,
    #[serde(default)]
    pub init_balance: Option<f64>,
    /// Track configurations, embedded by the backend
    #[serde(default)]
    pub followed_kols: Vec<KolTrackItem>,
}

/// Response of `GET /user/get`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total: u64,
}

/// Body of `POST /user/add`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserForm {
    pub username: String,
    pub gate_api_key: String,
    pub gate_secret_key: String,
    pub trade_mode: TradeMode,
    pub enable_balance_monitor: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_name: Option<String>,
}

/// Body of `POST /user/update`. Only the fields that are set are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_mode: Option<TradeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_balance_monitor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_name: Option<String>,
}

impl UserUpdate {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
