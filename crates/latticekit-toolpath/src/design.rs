//! Design hand-off record
//!
//! Everything an exporter or renderer needs: the final waypoint stream, the
//! print-settings block and the documentation annotations.

use crate::generator::LatticeToolpath;
use latticekit_core::{
    Annotation, LatticeId, LatticeParameters, OutputMode, PreviewStyle, PrinterSettings,
    WaypointSequence,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeDesign {
    pub name: String,
    pub lattice_id: LatticeId,
    pub mode: OutputMode,
    pub printer: PrinterSettings,
    pub extrusion_width: f64,
    pub extrusion_height: f64,
    pub preview_style: PreviewStyle,
    pub annotations: Vec<Annotation>,
    pub steps: WaypointSequence,
}

impl LatticeDesign {
    /// Bundles a generated toolpath with the settings it was made for.
    pub fn new(
        name: impl Into<String>,
        toolpath: LatticeToolpath,
        params: &LatticeParameters,
        printer: PrinterSettings,
        preview_style: PreviewStyle,
    ) -> Self {
        Self {
            name: name.into(),
            lattice_id: toolpath.lattice_id,
            mode: toolpath.mode,
            printer,
            extrusion_width: params.extrusion_width,
            extrusion_height: params.extrusion_height,
            preview_style,
            annotations: Annotation::lattice_defaults(
                params.start_x,
                params.start_y,
                params.seg_length,
            ),
            steps: toolpath.steps,
        }
    }
}
