//! KOL (signal source) models.

use serde::{Deserialize, Serialize};

use super::enums::KolType;
use super::id::BigId;

/// A signal source whose posted trades are mirrored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Kol {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub kol_type: KolType,
    /// Discord channel carrying the signals
    pub dc_channel_id: BigId,
    /// Discord authors whose messages count as signals
    #[serde(default)]
    pub dc_author_ids: Vec<BigId>,
    /// Usernames tracking this KOL
    #[serde(default)]
    pub followed_by: Vec<String>,
}

/// `GET /kol/get` returns a bare array; the client wraps it here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KolList {
    pub kols: Vec<Kol>,
}

/// Body of `POST /kol/add`. IDs travel as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KolForm {
    pub name: String,
    pub kol_type: KolType,
    pub dc_channel_id: String,
    pub dc_author_ids: Vec<String>,
}
