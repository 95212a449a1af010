//! Track configuration models.
//!
//! The backend embeds track configurations inside each user record
//! (`followed_kols`); there is no separate list endpoint. [`TrackConfig`] is the
//! flattened view, [`TrackConfigForm`] the body of `POST /kol/track/add`.


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::enums::{AmountMode, TrackStatus};
use super::user::{KolTrackItem, User};

/// Max loss preset when switching a form to LOSS_FIXED.
pub const DEFAULT_MAX_LOSS: f64 = 10.0;

/// One user → KOL binding with its sizing policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackConfig {
    pub username: String,
    pub kol_name: String,
    pub is_reverse: bool,
    pub futures: Vec<String>,
    pub amount_mode: AmountMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_amounts: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentages: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_loss: Option<f64>,
    pub status: TrackStatus,
}

impl TrackConfig {
    fn from_item(username: &str, item: &KolTrackItem) -> Self {
        let non_empty = |map: &BTreeMap<String, f64>| (!map.is_empty()).then(|| map.clone());
        Self {
            username: username.to_string(),
            kol_name: item.name.clone(),
            is_reverse: item.is_reverse,
            futures: item.futures.clone(),
            amount_mode: item.amount_mode,
            fixed_amounts: non_empty(&item.fixed_amounts),
            percentages: non_empty(&item.percentages),
            max_loss: item.max_loss,
            status: if item.is_active { TrackStatus::Running } else { TrackStatus::Stopped },
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TrackStatus::Running
    }
}

impl User {
    /// Flatten this user's followed KOLs into track configurations.
    pub fn track_configs(&self) -> Vec<TrackConfig> {
        self.followed_kols
            .iter()
            .map(|item| TrackConfig::from_item(&self.username, item))
            .collect()
    }
}

/// Flatten every user's tracks, keeping user order then item order.
pub fn tracks_from_users(users: &[User]) -> Vec<TrackConfig> {
    users.iter().flat_map(User::track_configs).collect()
}

/// Reasons a track form cannot be submitted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackFormError {
    #[error("username is required")]
    MissingUsername,
    #[error("KOL name is required")]
    MissingKol,
    #[error("symbol must not be empty")]
    EmptySymbol,
    #[error("amount for {symbol} must be a non-zero number")]
    InvalidAmount { symbol: String },
    #[error("FIXED mode requires at least one fixed amount")]
    MissingFixedAmounts,
    #[error("PERCENTAGE mode requires at least one percentage")]
    MissingPercentages,
    #[error("LOSS_FIXED mode requires a positive max loss")]
    InvalidMaxLoss,
}

/// Body of `POST /kol/track/add`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackConfigForm {
    pub username: String,
    pub kol_name: String,
    pub is_reverse: bool,
    pub futures: Vec<String>,
    pub amount_mode: AmountMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_amounts: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentages: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_loss: Option<f64>,
}

fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_uppercase();
    (!symbol.is_empty()).then_some(symbol)
}

impl TrackConfigForm {
    /// New form in LOSS_FIXED mode with the default max loss.
    pub fn new(username: impl Into<String>, kol_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            kol_name: kol_name.into(),
            is_reverse: false,
            futures: Vec::new(),
            amount_mode: AmountMode::LossFixed,
            fixed_amounts: None,
            percentages: None,
            max_loss: Some(DEFAULT_MAX_LOSS),
        }
    }

    /// Add a futures symbol. Returns false for empty input or duplicates.
    pub fn add_future(&mut self, raw: &str) -> bool {
        match normalize_symbol(raw) {
            Some(symbol) if !self.futures.contains(&symbol) => {
                self.futures.push(symbol);
                true
            }
            _ => false,
        }
    }

    pub fn remove_future(&mut self, raw: &str) {
        if let Some(symbol) = normalize_symbol(raw) {
            self.futures.retain(|f| *f != symbol);
        }
    }

    /// Switch the sizing policy, resetting the fields of the other modes.
    pub fn set_amount_mode(&mut self, mode: AmountMode) {
        self.amount_mode = mode;
        self.fixed_amounts = (mode == AmountMode::Fixed).then(BTreeMap::new);
        self.percentages = (mode == AmountMode::Percentage).then(BTreeMap::new);
        self.max_loss = (mode == AmountMode::LossFixed).then_some(DEFAULT_MAX_LOSS);
    }

    pub fn set_fixed_amount(&mut self, raw: &str, amount: f64) -> Result<(), TrackFormError> {
        let (symbol, amount) = checked_entry(raw, amount)?;
        self.fixed_amounts.get_or_insert_with(BTreeMap::new).insert(symbol, amount);
        Ok(())
    }

    pub fn set_percentage(&mut self, raw: &str, pct: f64) -> Result<(), TrackFormError> {
        let (symbol, pct) = checked_entry(raw, pct)?;
        self.percentages.get_or_insert_with(BTreeMap::new).insert(symbol, pct);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), TrackFormError> {
        if self.username.trim().is_empty() {
            return Err(TrackFormError::MissingUsername);
        }
        if self.kol_name.trim().is_empty() {
            return Err(TrackFormError::MissingKol);
        }
        match self.amount_mode {
            AmountMode::Fixed if self.fixed_amounts.as_ref().map_or(true, BTreeMap::is_empty) => {
                Err(TrackFormError::MissingFixedAmounts)
            }
            AmountMode::Percentage
                if self.percentages.as_ref().map_or(true, BTreeMap::is_empty) =>
            {
                Err(TrackFormError::MissingPercentages)
            }
            AmountMode::LossFixed if !self.max_loss.is_some_and(|v| v.is_finite() && v > 0.0) => {
                Err(TrackFormError::InvalidMaxLoss)
            }
            _ => Ok(()),
        }
    }
}

fn checked_entry(raw: &str, value: f64) -> Result<(String, f64), TrackFormError> {
    let symbol = normalize_symbol(raw).ok_or(TrackFormError::EmptySymbol)?;
    if !value.is_finite() || value == 0.0 {
        return Err(TrackFormError::InvalidAmount { symbol });
    }
    Ok((symbol, value))
}
