//! # Fusion Types
//!
//! Domain models and error definitions for the Fusion Alpha console.
//!
//! This crate provides the type system shared by the API client and the CLI:
//!
//! - **`error`** - Typed errors for console settings
//! - **`models`** - Backend payloads (User, KOL, track configuration) and console settings
//!
//! ## Architecture Role
//!
//! `fusion-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        fusion-types (this crate)
//!                │
//!                ▼
//!          fusion-client
//!                │
//!                ▼
//!          fusion-console
//! ```
//!
//! The backend is the only source of truth for users, KOLs and tracks. These
//! types describe its payloads; nothing here persists domain data.

pub mod error;
pub mod models;

pub use error::ConfigError;

pub use models::{
    tracks_from_users, AmountMode, ApiResponse, BigId, ConsoleSettings, DashboardStats, Kol,
    KolForm, KolList, KolTrackItem, KolType, Theme, TrackConfig, TrackConfigForm, TrackFormError,
    TrackStatus, TradeMode, TransportPreference, User, UserForm, UserList, UserUpdate,
};
