//! Path finalization
//!
//! Closes each tiled layer back to its origin, places the stacked lattice
//! on the bed and, for previews, strips travel moves.

use crate::unit_cell::TilingOffsets;
use latticekit_core::{ExtrusionState, Point, Vector, Waypoint, WaypointSequence};

/// First layer height as a fraction of the extrusion height
pub const FIRST_LAYER_GAP_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFinalizer {
    repeat_offset_x: f64,
    start_x: f64,
    start_y: f64,
    extrusion_height: f64,
}

impl PathFinalizer {
    pub fn new(offsets: &TilingOffsets, start_x: f64, start_y: f64, extrusion_height: f64) -> Self {
        Self {
            repeat_offset_x: offsets.repeat_offset_x,
            start_x,
            start_y,
            extrusion_height,
        }
    }

    /// Returns a copy of `layer` that prints back to the layer origin.
    ///
    /// The head steps one repeat behind the first column at the height it
    /// finished on, runs down to y = 0 and then across to the origin. All
    /// three moves are printed and stay at the height of the last point.
    pub fn close_layer(&self, layer: &WaypointSequence) -> WaypointSequence {
        let Some(last) = layer.last_point().copied() else {
            return layer.clone();
        };

        let mut closed = WaypointSequence::with_capacity(layer.len() + 4);
        closed.append(layer);
        if !layer.final_state().is_depositing() {
            closed.push_state(ExtrusionState::Depositing);
        }
        closed.push_point(Point::new(-self.repeat_offset_x, last.y, last.z));
        closed.push_point(Point::new(-self.repeat_offset_x, 0.0, last.z));
        closed.push_point(Point::new(0.0, 0.0, last.z));
        closed
    }

    /// Translation that puts the lattice origin at the requested start.
    pub fn placement(&self) -> Vector {
        Vector::new(
            self.start_x,
            self.start_y,
            FIRST_LAYER_GAP_FACTOR * self.extrusion_height,
        )
    }

    pub fn place(&self, stacked: &WaypointSequence) -> WaypointSequence {
        stacked.translated(self.placement())
    }
}

/// Points the head reaches while depositing, in order, without markers.
pub fn preview_path(path: &WaypointSequence) -> WaypointSequence {
    path.visits()
        .filter(|visit| visit.state.is_depositing())
        .map(|visit| Waypoint::Point(visit.point))
        .collect()
}
