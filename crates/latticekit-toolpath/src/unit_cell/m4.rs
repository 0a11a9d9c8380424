//! M4: re-entrant star cell built in row pairs

use super::{CellGeometry, ReturnRow, StripLayout, StrutPath, TilingOffsets, UnitCell};
use latticekit_core::{LatticeId, Point};
use tracing::{info, warn};

/// Corner angle that M4 cannot build directly
pub const M4_CLAMP_FROM: f64 = 150.0;
/// Angle used in its place
pub const M4_CLAMPED_ALPHA: f64 = 120.0;
/// Above this angle consecutive M4 copies no longer meet end to end
pub const M4_MAX_CLOSING_ALPHA: f64 = 135.0;

/// Tilt of the M4 cell in degrees for a corner angle `alpha` (degrees).
pub fn m4_deviation_deg(alpha: f64) -> f64 {
    let a = alpha.to_radians();
    let ratio = -(1.0 + (2.0 * a).sin()).sqrt() / (3.0 - 2.0 * a.cos() + 2.0 * a.sin()).sqrt();
    ratio.clamp(-1.0, 1.0).acos().to_degrees().abs()
}

pub(super) fn build(geo: &CellGeometry) -> UnitCell {
    let alpha = if geo.alpha == M4_CLAMP_FROM {
        info!(
            requested = geo.alpha,
            used = M4_CLAMPED_ALPHA,
            "M4 corner angle substituted"
        );
        M4_CLAMPED_ALPHA
    } else {
        if geo.alpha > M4_MAX_CLOSING_ALPHA {
            warn!(
                alpha = geo.alpha,
                "M4 copies do not join end to end above {} degrees", M4_MAX_CLOSING_ALPHA
            );
        }
        geo.alpha
    };
    let d = m4_deviation_deg(alpha);

    let origin = Point::origin();
    let mut path = StrutPath::start(origin, geo.seg_length);
    let rise = path.strut(90.0 - d);
    path.strut(270.0 - d - alpha);
    let top = path.strut(180.0 - d);
    let reach = path.hop(&[-d]);
    let shoulder = path.strut(180.0 - d - alpha);
    let low = path.strut(90.0 - d - alpha);
    path.strut(-d - alpha);
    let next = path.hop(&[-90.0 - d - alpha, -180.0 - d - alpha]);

    let offsets = TilingOffsets {
        repeat_offset_x: next.x - origin.x,
        row_offset_x: rise.x - origin.x,
        row_offset_y: top.y - low.y,
    };

    let row_end_x = next.x + (geo.units_x - 1) as f64 * offsets.repeat_offset_x;
    let back_start = Point::xy(
        row_end_x + offsets.row_offset_x,
        offsets.row_offset_y - (shoulder.y - low.y - (reach.y - shoulder.y)),
    );
    let mut back = StrutPath::start(back_start, geo.seg_length);
    back.strut(-90.0 - d);
    back.strut(90.0 - d - alpha);
    back.strut(-d - alpha);
    back.strut(-90.0 - d - alpha);
    back.strut(180.0 - d);
    back.hop(&[-d]);
    back.strut(180.0 - d - alpha);
    back.hop(&[90.0 - d - alpha, -d - alpha]);

    // Strips come in pairs of rows, so an odd width rounds up
    let rows = geo.units_y + geo.units_y % 2;
    if rows != geo.units_y {
        info!(requested = geo.units_y, used = rows, "M4 units_y rounded up to even");
    }

    UnitCell {
        lattice_id: LatticeId::M4,
        alpha,
        seg_length: geo.seg_length,
        units_x: geo.units_x,
        steps: path.finish(),
        offsets,
        return_row: ReturnRow::Unit {
            steps: back.finish(),
            copies: geo.units_x,
        },
        strips: StripLayout {
            count: rows / 2,
            pitch_y: 2.0 * offsets.row_offset_y,
            alternate_shift_x: None,
        },
    }
}
