//! Enumerations shared by backend payloads and console settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading mode of a user's exchange account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeMode {
    /// Orders are placed on the live exchange
    Real,
    /// Orders are simulated by the backend
    #[default]
    Simulated,
}

impl fmt::Display for TradeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Real => write!(f, "REAL"),
            Self::Simulated => write!(f, "SIMULATED"),
        }
    }
}

impl FromStr for TradeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REAL" => Ok(Self::Real),
            "SIMULATED" => Ok(Self::Simulated),
            other => Err(format!("unknown trade mode: {}", other)),
        }
    }
}

/// Kind of KOL signal source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KolType {
    #[default]
    Normal,
    Wwg,
}

impl fmt::Display for KolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Wwg => write!(f, "WWG"),
        }
    }
}

impl FromStr for KolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORMAL" => Ok(Self::Normal),
            "WWG" => Ok(Self::Wwg),
            other => Err(format!("unknown KOL type: {}", other)),
        }
    }
}

/// Position sizing policy of a track configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountMode {
    /// Fixed amount per symbol
    Fixed,
    /// Percentage of balance per symbol
    Percentage,
    /// Fixed maximum loss per trade
    #[default]
    LossFixed,
}

impl fmt::Display for AmountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fixed => write!(f, "FIXED"),
            Self::Percentage => write!(f, "PERCENTAGE"),
            Self::LossFixed => write!(f, "LOSS_FIXED"),
        }
    }
}

impl FromStr for AmountMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "FIXED" => Ok(Self::Fixed),
            "PERCENTAGE" => Ok(Self::Percentage),
            "LOSS_FIXED" => Ok(Self::LossFixed),
            other => Err(format!("unknown amount mode: {}", other)),
        }
    }
}

/// Runtime status of a track configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackStatus {
    Running,
    Stopped,
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Running => write!(f, "running"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Console color theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Which transport the console should use to reach the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportPreference {
    /// Use the relay if one is available, otherwise call directly
    #[default]
    Auto,
    /// Always issue HTTP calls from this process
    Direct,
    /// Route every call through the privileged relay
    Relayed,
}

impl fmt::Display for TransportPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Auto => write!(f, "auto"),
            Self::Direct => write!(f, "direct"),
            Self::Relayed => write!(f, "relayed"),
        }
    }
}

impl FromStr for TransportPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "direct" => Ok(Self::Direct),
            "relayed" | "relay" => Ok(Self::Relayed),
            other => Err(format!("unknown transport: {}", other)),
        }
    }
}
