//! Command-line overrides layered over a loaded [`Config`]

use crate::{Config, LatticeId, OutputMode, PreviewStyle, PrinterModel};
use clap::Args;

/// Values given on the command line; each one replaces the file value
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct LatticeOverrides {
    /// Lattice family (M1, M2, M3, M4)
    #[arg(long, value_name = "ID")]
    pub lattice: Option<LatticeId>,

    /// Star-polygon corner angle in degrees
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Strut length in mm
    #[arg(long, value_name = "MM")]
    pub seg_length: Option<f64>,

    /// Unit cells along X
    #[arg(long)]
    pub units_x: Option<u32>,

    /// Unit cells along Y
    #[arg(long)]
    pub units_y: Option<u32>,

    /// Number of layers
    #[arg(long)]
    pub layers: Option<u32>,

    /// Extrusion width in mm
    #[arg(long, value_name = "MM")]
    pub extrusion_width: Option<f64>,

    /// Extrusion height (layer thickness) in mm
    #[arg(long, value_name = "MM")]
    pub extrusion_height: Option<f64>,

    /// Start point X in mm
    #[arg(long, value_name = "MM")]
    pub start_x: Option<f64>,

    /// Start point Y in mm
    #[arg(long, value_name = "MM")]
    pub start_y: Option<f64>,

    /// Printer model (e.g. 'ender_3', 'prusa_i3')
    #[arg(long)]
    pub printer: Option<PrinterModel>,

    /// Output mode (visualize, export)
    #[arg(long)]
    pub mode: Option<OutputMode>,

    /// Preview line style (tube, line)
    #[arg(long, value_parser = parse_preview_style)]
    pub preview_style: Option<PreviewStyle>,
}

fn parse_preview_style(s: &str) -> Result<PreviewStyle, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "tube" => Ok(PreviewStyle::Tube),
        "line" => Ok(PreviewStyle::Line),
        other => Err(format!("'{other}' is neither 'tube' nor 'line'")),
    }
}

impl LatticeOverrides {
    /// Returns `config` with every given value replaced.
    pub fn apply(&self, mut config: Config) -> Config {
        let lattice = &mut config.lattice;
        if let Some(id) = self.lattice {
            lattice.lattice_id = id;
        }
        if let Some(alpha) = self.alpha {
            lattice.alpha = alpha;
        }
        if let Some(seg_length) = self.seg_length {
            lattice.seg_length = seg_length;
        }
        if let Some(units_x) = self.units_x {
            lattice.units_x = units_x;
        }
        if let Some(units_y) = self.units_y {
            lattice.units_y = units_y;
        }
        if let Some(layers) = self.layers {
            lattice.layers = layers;
        }
        if let Some(width) = self.extrusion_width {
            lattice.extrusion_width = width;
        }
        if let Some(height) = self.extrusion_height {
            lattice.extrusion_height = height;
        }
        if let Some(x) = self.start_x {
            lattice.start_x = x;
        }
        if let Some(y) = self.start_y {
            lattice.start_y = y;
        }

        if let Some(printer) = self.printer {
            config.printer.printer = printer;
        }
        if let Some(mode) = self.mode {
            config.output.mode = mode;
        }
        if let Some(style) = self.preview_style {
            config.output.preview_style = style;
        }
        config
    }
}
