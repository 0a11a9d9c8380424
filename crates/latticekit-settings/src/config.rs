//! Configuration management
//!
//! One immutable [`Config`] value carries everything a run needs: the
//! lattice parameters, the printer block and the output settings. It is
//! read once, validated, and never mutated by the pipeline.
//!
//! Files may be JSON or TOML; the format follows the file extension.

use crate::error::{SettingsError, SettingsResult};
use latticekit_core::{
    LatticeError, LatticeParameters, OutputMode, PreviewStyle, PrinterSettings,
    DEFAULT_DESIGN_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File formats understood by [`Config::load_from_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// What to produce and how to present it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Preview or machine-program export
    pub mode: OutputMode,
    /// Line rendering for previews
    pub preview_style: PreviewStyle,
    /// Name given to the design record
    pub design_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            mode: OutputMode::Visualize,
            preview_style: PreviewStyle::Tube,
            design_name: DEFAULT_DESIGN_NAME.to_string(),
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Lattice geometry and stacking
    pub lattice: LatticeParameters,
    /// Printer identity and print settings
    pub printer: PrinterSettings,
    /// Output mode and presentation
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the per-user config file
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("latticekit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, else the per-user file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LatticeError> {
        self.lattice.validate()?;

        if !self.lattice.extrusion_width.is_finite() || self.lattice.extrusion_width <= 0.0 {
            return Err(LatticeError::invalid(
                "extrusion_width",
                format!("{} must be a positive width", self.lattice.extrusion_width),
            ));
        }

        self.printer.validate()?;

        if self.output.design_name.trim().is_empty() {
            return Err(LatticeError::invalid("design_name", "must not be empty"));
        }

        Ok(())
    }
}
