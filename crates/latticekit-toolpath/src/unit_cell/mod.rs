//! Unit cell synthesis
//!
//! Builds the smallest repeating strut pattern of each lattice family by
//! walking a cursor through fixed-length struts at family-specific angles,
//! and derives the offsets that tile it. Every family also describes the
//! second row of a strip ([`ReturnRow`]) and how strips stack
//! ([`StripLayout`]), so the tiling engine never branches on the family.

mod m1;
mod m2;
mod m3;
mod m4;

pub use m2::m2_deviation_deg;
pub use m4::{m4_deviation_deg, M4_CLAMPED_ALPHA, M4_CLAMP_FROM, M4_MAX_CLOSING_ALPHA};

use latticekit_core::{
    ExtrusionState, LatticeError, LatticeId, LatticeParameters, Point, WaypointSequence,
};
use serde::Serialize;
use tracing::debug;

/// Translations that tile a unit cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilingOffsets {
    /// X translation between consecutive unit copies in a row
    pub repeat_offset_x: f64,
    /// X shift of the row that follows row 1
    pub row_offset_x: f64,
    /// Y distance between row 1 and the row that follows
    pub row_offset_y: f64,
}

/// How the second row of a strip is produced
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnRow {
    /// Row 1 mirrored about the X axis and traversed backwards
    Reflected,
    /// A dedicated unit, already placed at the end of row 1, repeated
    /// `copies` times towards -X
    Unit {
        steps: WaypointSequence,
        copies: usize,
    },
}

/// How two-row strips are stacked in Y
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripLayout {
    /// Number of strips per layer
    pub count: usize,
    /// Y distance between consecutive strips
    pub pitch_y: f64,
    /// X shift applied to every odd strip
    pub alternate_shift_x: Option<f64>,
}

/// A family's repeating pattern together with the recipe to tile it
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCell {
    pub lattice_id: LatticeId,
    /// Corner angle actually used (M4 substitutes 120 for 150)
    pub alpha: f64,
    pub seg_length: f64,
    pub units_x: usize,
    /// The unit, starting at the first point of row 1
    pub steps: WaypointSequence,
    pub offsets: TilingOffsets,
    pub return_row: ReturnRow,
    pub strips: StripLayout,
}

/// Validated geometry handed to the family constructors
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellGeometry {
    pub alpha: f64,
    pub seg_length: f64,
    pub units_x: usize,
    pub units_y: usize,
}

/// Builds the unit cell for one set of parameters
#[derive(Debug, Clone)]
pub struct UnitCellBuilder {
    lattice_id: LatticeId,
    geometry: CellGeometry,
}

impl UnitCellBuilder {
    /// Validates the geometric parameters; layers and extrusion are not needed here.
    pub fn new(params: &LatticeParameters) -> Result<Self, LatticeError> {
        params.validate_geometry()?;
        Ok(Self {
            lattice_id: params.lattice_id,
            geometry: CellGeometry {
                alpha: params.alpha,
                seg_length: params.seg_length,
                units_x: params.units_x as usize,
                units_y: params.units_y as usize,
            },
        })
    }

    pub fn lattice_id(&self) -> LatticeId {
        self.lattice_id
    }

    pub fn build(&self) -> UnitCell {
        let cell = match self.lattice_id {
            LatticeId::M1 => m1::build(&self.geometry),
            LatticeId::M2 => m2::build(&self.geometry),
            LatticeId::M3 => m3::build(&self.geometry),
            LatticeId::M4 => m4::build(&self.geometry),
        };

        debug!(
            lattice = %cell.lattice_id,
            alpha = cell.alpha,
            points = cell.steps.point_count(),
            repeat_offset_x = cell.offsets.repeat_offset_x,
            row_offset_x = cell.offsets.row_offset_x,
            row_offset_y = cell.offsets.row_offset_y,
            strips = cell.strips.count,
            "Built unit cell"
        );

        cell
    }
}

/// Pen that lays struts of one fixed length from a moving cursor
pub(crate) struct StrutPath {
    steps: WaypointSequence,
    cursor: Point,
    seg_length: f64,
}

impl StrutPath {
    pub fn start(origin: Point, seg_length: f64) -> Self {
        let mut steps = WaypointSequence::new();
        steps.push_point(origin);
        Self {
            steps,
            cursor: origin,
            seg_length,
        }
    }

    /// Lays one strut at `angle_deg` and returns its end point.
    pub fn strut(&mut self, angle_deg: f64) -> Point {
        self.cursor = self.cursor.polar_step(self.seg_length, angle_deg);
        self.steps.push_point(self.cursor);
        self.cursor
    }

    /// Travels through strut-length hops with the extruder off, then turns
    /// it back on. Returns where the head ends up.
    pub fn hop(&mut self, angles_deg: &[f64]) -> Point {
        self.steps.push_state(ExtrusionState::Traveling);
        for angle in angles_deg {
            self.strut(*angle);
        }
        self.steps.push_state(ExtrusionState::Depositing);
        self.cursor
    }

    pub fn finish(self) -> WaypointSequence {
        self.steps
    }
}
