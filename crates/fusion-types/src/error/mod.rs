//! Typed error definitions for the console.
//!
//! Transport and backend failures live in `fusion-client`; this module only
//! covers the locally stored console settings.

mod config;

pub use config::ConfigError;
