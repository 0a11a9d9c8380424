//! LatticeKit Settings Crate
//!
//! Handles the run configuration: defaults, JSON/TOML persistence and
//! validation.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, OutputSettings};
pub use error::{SettingsError, SettingsResult};
