//! Data models handed to the exporter/renderer alongside the toolpath
//!
//! This module provides:
//! - Printer identity and the print-settings block
//! - Documentation annotations
//! - The output mode switch and preview style

pub mod annotation;
pub mod printer;

pub use annotation::Annotation;
pub use printer::{PrinterModel, PrinterSettings};

use crate::error::LatticeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name given to a design when none is configured
pub const DEFAULT_DESIGN_NAME: &str = "star_polygon_lattice";

/// What the finished toolpath is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Interactive preview; travel moves are stripped
    #[default]
    Visualize,
    /// Machine-program export; the full sequence is kept
    #[serde(alias = "gcode")]
    Export,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visualize => write!(f, "visualize"),
            Self::Export => write!(f, "export"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visualize" | "visualise" | "plot" => Ok(Self::Visualize),
            "export" | "gcode" => Ok(Self::Export),
            other => Err(LatticeError::invalid(
                "output_mode",
                format!("'{other}' is neither 'visualize' nor 'export'"),
            )),
        }
    }
}

/// How the renderer should draw printed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStyle {
    /// Extruded tubes sized by extrusion width and height
    #[default]
    Tube,
    /// Thin center lines
    Line,
}

impl fmt::Display for PreviewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tube => write!(f, "tube"),
            Self::Line => write!(f, "line"),
        }
    }
}
