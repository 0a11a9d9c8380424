//! Layer stacking

use latticekit_core::{LatticeError, Vector, WaypointSequence};
use tracing::debug;

/// Repeats a closed layer upward, one extrusion height per layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStacker {
    extrusion_height: f64,
    layers: u32,
}

impl LayerStacker {
    pub fn new(extrusion_height: f64, layers: u32) -> Result<Self, LatticeError> {
        if layers < 1 {
            return Err(LatticeError::invalid("layers", "must be at least 1"));
        }
        if !extrusion_height.is_finite() || extrusion_height <= 0.0 {
            return Err(LatticeError::invalid(
                "extrusion_height",
                format!("{extrusion_height} must be a positive height"),
            ));
        }
        Ok(Self {
            extrusion_height,
            layers,
        })
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// Concatenates `layers` copies of `layer`, copy `i` raised by `i * extrusion_height`.
    pub fn stack(&self, layer: &WaypointSequence) -> WaypointSequence {
        debug!(
            layers = self.layers,
            entries_per_layer = layer.len(),
            "Stacking layers"
        );
        layer.copies(Vector::z(self.extrusion_height), self.layers as usize)
    }
}
