//! Printer identity and print settings
//!
//! The style/printer block that accompanies a finished toolpath. The core
//! never interprets these values; they are passed through to whatever
//! renders the machine program.

use crate::error::LatticeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Printers the exporter knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterModel {
    Generic,
    #[serde(rename = "ultimaker2plus")]
    Ultimaker2Plus,
    PrusaI3,
    #[default]
    #[serde(rename = "ender_3")]
    Ender3,
    #[serde(rename = "cr_10")]
    Cr10,
    BambulabX1,
    #[serde(rename = "toolchanger_T0")]
    ToolchangerT0,
}

impl PrinterModel {
    pub const ALL: [PrinterModel; 7] = [
        PrinterModel::Generic,
        PrinterModel::Ultimaker2Plus,
        PrinterModel::PrusaI3,
        PrinterModel::Ender3,
        PrinterModel::Cr10,
        PrinterModel::BambulabX1,
        PrinterModel::ToolchangerT0,
    ];

    /// Identifier used in configuration files and by the exporter
    pub fn id(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Ultimaker2Plus => "ultimaker2plus",
            Self::PrusaI3 => "prusa_i3",
            Self::Ender3 => "ender_3",
            Self::Cr10 => "cr_10",
            Self::BambulabX1 => "bambulab_x1",
            Self::ToolchangerT0 => "toolchanger_T0",
        }
    }
}

impl fmt::Display for PrinterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PrinterModel {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LatticeError::invalid("printer", format!("unknown printer '{wanted}'")))
    }
}

/// Print settings handed to the exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Target printer
    pub printer: PrinterModel,
    /// Nozzle temperature (°C)
    pub nozzle_temp: f64,
    /// Bed temperature (°C)
    pub bed_temp: f64,
    /// Part cooling fan (0-100 %)
    pub fan_percent: f64,
    /// Material flow multiplier (%)
    pub material_flow_percent: f64,
    /// Print speed multiplier (%)
    pub print_speed_percent: f64,
    /// Print speed at the start of the program (mm/min)
    pub initial_print_speed: f64,
    /// Named priming sequence run before the lattice
    pub primer: String,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            printer: PrinterModel::Ender3,
            nozzle_temp: 228.0,
            bed_temp: 40.0,
            fan_percent: 100.0,
            material_flow_percent: 100.0,
            print_speed_percent: 100.0,
            initial_print_speed: 1000.0,
            primer: "front_lines_then_y".to_string(),
        }
    }
}

impl PrinterSettings {
    /// Validate values the exporter cannot work with
    pub fn validate(&self) -> Result<(), LatticeError> {
        if !(0.0..=100.0).contains(&self.fan_percent) {
            return Err(LatticeError::invalid(
                "fan_percent",
                format!("{} is outside 0..=100", self.fan_percent),
            ));
        }

        if self.material_flow_percent <= 0.0 {
            return Err(LatticeError::invalid(
                "material_flow_percent",
                "must be greater than 0",
            ));
        }

        if self.print_speed_percent <= 0.0 || self.initial_print_speed <= 0.0 {
            return Err(LatticeError::invalid("print_speed", "must be greater than 0"));
        }

        if self.primer.trim().is_empty() {
            return Err(LatticeError::invalid("primer", "must name a priming sequence"));
        }

        Ok(())
    }
}
