//! Tiling engine
//!
//! Replicates a unit cell into row 1, builds the return row, joins the two
//! into a strip and stacks strips in Y to form one layer.
//!
//! Copies of a unit meet end to end, so the seam between them is either a
//! zero-length move or a regular strut. Where two pieces meet at any other
//! distance (row 1 to row 2, strip to strip) the head travels across with
//! the extruder off instead of laying an odd-length line.

use crate::unit_cell::{ReturnRow, UnitCell};
use latticekit_core::{ExtrusionState, Point, Vector, Waypoint, WaypointSequence};
use serde::Serialize;
use tracing::debug;

/// Relative tolerance for deciding a seam is a joint or a strut
pub const SEAM_TOLERANCE: f64 = 1e-6;

/// One tiled layer at z = 0, before closure
#[derive(Debug, Clone, PartialEq)]
pub struct TiledLayer {
    pub path: WaypointSequence,
    /// Strips stacked in Y
    pub strip_count: usize,
    /// Seams crossed with the extruder off
    pub bridged_seams: usize,
}

/// Summary of a tiled layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilingStats {
    pub strip_count: usize,
    pub bridged_seams: usize,
    pub points: usize,
}

impl TiledLayer {
    pub fn stats(&self) -> TilingStats {
        TilingStats {
            strip_count: self.strip_count,
            bridged_seams: self.bridged_seams,
            points: self.path.point_count(),
        }
    }
}

/// Whether a move of `gap` can be printed between two pieces as is
pub fn is_printable_seam(gap: f64, seg_length: f64) -> bool {
    let tolerance = SEAM_TOLERANCE * seg_length;
    gap <= tolerance || (gap - seg_length).abs() <= tolerance
}

/// Concatenates pieces, bridging seams that are not printable
struct Stitcher {
    out: WaypointSequence,
    seg_length: f64,
    bridged: usize,
}

impl Stitcher {
    fn new(seg_length: f64, capacity: usize) -> Self {
        Self {
            out: WaypointSequence::with_capacity(capacity),
            seg_length,
            bridged: 0,
        }
    }

    fn append(&mut self, piece: &WaypointSequence) {
        let gap = match (self.out.last_point(), piece.first_point()) {
            (Some(from), Some(to)) => from.distance_to(to),
            _ => 0.0,
        };
        let needs_bridge =
            self.out.final_state().is_depositing() && !is_printable_seam(gap, self.seg_length);

        match piece.as_slice().split_first() {
            Some((Waypoint::Point(first), rest)) if needs_bridge => {
                self.out.push_state(ExtrusionState::Traveling);
                self.out.push_point(*first);
                self.out.push_state(ExtrusionState::Depositing);
                for step in rest {
                    self.out.push(*step);
                }
                self.bridged += 1;
                debug!(gap, "Bridged seam with a travel move");
            }
            _ => self.out.append(piece),
        }
    }

    fn finish(self) -> (WaypointSequence, usize) {
        (self.out, self.bridged)
    }
}

/// Replicates one unit cell into a full layer
pub struct TilingEngine<'a> {
    cell: &'a UnitCell,
}

impl<'a> TilingEngine<'a> {
    pub fn new(cell: &'a UnitCell) -> Self {
        Self { cell }
    }

    /// `units_x` copies of the unit stepped along +X.
    pub fn row_one(&self) -> WaypointSequence {
        self.stitch_row_one().0
    }

    /// The second row of a strip, starting near the end of `row_one`.
    pub fn row_two(&self, row_one: &WaypointSequence) -> WaypointSequence {
        self.stitch_row_two(row_one).0
    }

    /// Row 1 followed by row 2.
    pub fn strip(&self) -> WaypointSequence {
        self.stitch_strip().0
    }

    /// Stacks strips in Y, shifting odd strips where the family asks for it.
    pub fn tile(&self) -> TiledLayer {
        let (strip, strip_bridges) = self.stitch_strip();
        let layout = self.cell.strips;
        let mut layer = Stitcher::new(self.cell.seg_length, strip.len() * layout.count);

        for j in 0..layout.count {
            let shift_x = match layout.alternate_shift_x {
                Some(dx) if j % 2 == 1 => dx,
                _ => 0.0,
            };
            layer.append(&strip.translated(Vector::new(shift_x, j as f64 * layout.pitch_y, 0.0)));
        }

        let (path, layer_bridges) = layer.finish();
        let bridged = layer_bridges + strip_bridges * layout.count;

        debug!(
            lattice = %self.cell.lattice_id,
            strips = layout.count,
            points = path.point_count(),
            bridged,
            "Tiled layer"
        );

        TiledLayer {
            path,
            strip_count: layout.count,
            bridged_seams: bridged,
        }
    }

    fn stitch_row_one(&self) -> (WaypointSequence, usize) {
        let unit = &self.cell.steps;
        let mut row = Stitcher::new(self.cell.seg_length, unit.len() * self.cell.units_x);
        for i in 0..self.cell.units_x {
            row.append(&unit.translated(Vector::x(i as f64 * self.cell.offsets.repeat_offset_x)));
        }
        row.finish()
    }

    fn stitch_row_two(&self, row_one: &WaypointSequence) -> (WaypointSequence, usize) {
        match &self.cell.return_row {
            ReturnRow::Reflected => (
                row_one
                    .map_points(|p| p.reflect_xy_polar(&Point::origin(), 0.0))
                    .reversed(),
                0,
            ),
            ReturnRow::Unit { steps, copies } => {
                let mut row = Stitcher::new(self.cell.seg_length, steps.len() * copies);
                for i in 0..*copies {
                    let shift = Vector::x(-(i as f64) * self.cell.offsets.repeat_offset_x);
                    row.append(&steps.translated(shift));
                }
                row.finish()
            }
        }
    }

    fn stitch_strip(&self) -> (WaypointSequence, usize) {
        let (row_one, one_bridges) = self.stitch_row_one();
        let (row_two, two_bridges) = self.stitch_row_two(&row_one);
        let mut strip = Stitcher::new(self.cell.seg_length, row_one.len() + row_two.len());
        strip.append(&row_one);
        strip.append(&row_two);
        let (path, seam_bridges) = strip.finish();
        (path, one_bridges + two_bridges + seam_bridges)
    }
}
