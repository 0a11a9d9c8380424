//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading,
//! persistence, and validation.

use latticekit_core::LatticeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file extension names no supported format.
    #[error("Unsupported config format for {path}: expected .json or .toml")]
    UnsupportedFormat { path: PathBuf },

    /// The configuration directory could not be found or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] LatticeError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl SettingsError {
    /// Whether the configuration was readable but held invalid values
    pub fn is_invalid(&self) -> bool {
        matches!(self, SettingsError::Invalid(_))
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
