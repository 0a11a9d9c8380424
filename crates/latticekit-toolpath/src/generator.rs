//! Lattice generator
//!
//! Runs the full pipeline: unit cell, tiling, closure, stacking, placement
//! and, for previews, travel stripping.

use crate::finalize::{preview_path, PathFinalizer};
use crate::layers::LayerStacker;
use crate::tiling::TilingEngine;
use crate::unit_cell::{TilingOffsets, UnitCell, UnitCellBuilder};
use latticekit_core::{LatticeError, LatticeId, LatticeParameters, OutputMode, WaypointSequence};
use serde::Serialize;
use tracing::info;

/// The finished toolpath and the facts needed to interpret it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatticeToolpath {
    pub lattice_id: LatticeId,
    /// Corner angle actually used
    pub alpha: f64,
    pub mode: OutputMode,
    pub offsets: TilingOffsets,
    pub strip_count: usize,
    pub layers: u32,
    /// Seams per layer crossed with the extruder off
    pub bridged_seams: usize,
    pub steps: WaypointSequence,
}

/// Turns one set of parameters into a toolpath
#[derive(Debug, Clone)]
pub struct LatticeGenerator {
    params: LatticeParameters,
}

impl LatticeGenerator {
    pub fn new(params: LatticeParameters) -> Result<Self, LatticeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &LatticeParameters {
        &self.params
    }

    pub fn unit_cell(&self) -> Result<UnitCell, LatticeError> {
        Ok(UnitCellBuilder::new(&self.params)?.build())
    }

    /// One closed layer at z = 0, before placement.
    pub fn layer(&self) -> Result<WaypointSequence, LatticeError> {
        let cell = self.unit_cell()?;
        let tiled = TilingEngine::new(&cell).tile();
        Ok(self.finalizer(&cell.offsets).close_layer(&tiled.path))
    }

    pub fn generate(&self, mode: OutputMode) -> Result<LatticeToolpath, LatticeError> {
        let p = &self.params;
        let cell = self.unit_cell()?;
        let tiled = TilingEngine::new(&cell).tile();
        let finalizer = self.finalizer(&cell.offsets);

        let closed = finalizer.close_layer(&tiled.path);
        let stacked = LayerStacker::new(p.extrusion_height, p.layers)?.stack(&closed);
        let placed = finalizer.place(&stacked);

        let steps = match mode {
            OutputMode::Export => placed,
            OutputMode::Visualize => preview_path(&placed),
        };

        info!(
            lattice = %cell.lattice_id,
            alpha = cell.alpha,
            %mode,
            layers = p.layers,
            strips = tiled.strip_count,
            points = steps.point_count(),
            "Generated lattice toolpath"
        );

        Ok(LatticeToolpath {
            lattice_id: cell.lattice_id,
            alpha: cell.alpha,
            mode,
            offsets: cell.offsets,
            strip_count: tiled.strip_count,
            layers: p.layers,
            bridged_seams: tiled.bridged_seams,
            steps,
        })
    }

    fn finalizer(&self, offsets: &TilingOffsets) -> PathFinalizer {
        PathFinalizer::new(
            offsets,
            self.params.start_x,
            self.params.start_y,
            self.params.extrusion_height,
        )
    }
}
