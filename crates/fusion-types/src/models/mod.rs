//! Domain models for the Fusion Alpha console.
//!
//! Users, KOLs and track configurations are payloads of the backend REST API;
//! the console only renders and edits them.

mod enums;
mod id;
mod kol;
mod response;
mod settings;
mod stats;
mod track;
mod user;

// Re-export all models
pub use enums::{AmountMode, KolType, Theme, TrackStatus, TradeMode, TransportPreference};
pub use id::BigId;
pub use kol::{Kol, KolForm, KolList};
pub use response::ApiResponse;
pub use settings::{
    ConsoleSettings, DEFAULT_API_BASE_URL, DEFAULT_REFRESH_INTERVAL_MS, MIN_REFRESH_INTERVAL_MS,
};
pub use stats::DashboardStats;
pub use track::{tracks_from_users, TrackConfig, TrackConfigForm, TrackFormError, DEFAULT_MAX_LOSS};
pub use user::{KolTrackItem, User, UserForm, UserList, UserUpdate};
