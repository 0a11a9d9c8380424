//! M2: tilted star cell with a dedicated return unit
//!
//! Every strut angle is measured from a deviation `d` that levels the cell
//! so consecutive copies line up along X.

use super::{CellGeometry, ReturnRow, StripLayout, StrutPath, TilingOffsets, UnitCell};
use latticekit_core::{LatticeId, Point};

/// Tilt of the M2 cell in degrees for a corner angle `alpha` (degrees).
pub fn m2_deviation_deg(alpha: f64) -> f64 {
    let a = alpha.to_radians();
    ((1.0 - a.cos()) / (3f64.sqrt() + a.sin())).atan().to_degrees()
}

pub(super) fn build(geo: &CellGeometry) -> UnitCell {
    let alpha = geo.alpha;
    let d = m2_deviation_deg(alpha);

    let mut path = StrutPath::start(Point::origin(), geo.seg_length);
    let first = path.strut(d + 90.0 - alpha);
    path.strut(d + 30.0);
    let top = path.strut(d - 150.0 - alpha);
    path.hop(&[d + 30.0 - alpha, d - 150.0]);
    let foot = path.strut(d - 90.0);
    let low = path.strut(d - 30.0);
    path.strut(d + 30.0);
    path.strut(d + 90.0);
    path.strut(d + 150.0);
    path.hop(&[d - 30.0]);
    let notch = path.strut(d + 150.0 - alpha);
    let next = path.hop(&[d - 30.0 - alpha, d - 90.0]);

    let offsets = TilingOffsets {
        repeat_offset_x: next.x,
        row_offset_x: notch.x - foot.x,
        row_offset_y: top.y - low.y,
    };

    let back_start = Point::xy(
        first.x + geo.units_x as f64 * offsets.repeat_offset_x + offsets.row_offset_x,
        first.y + offsets.row_offset_y,
    );
    let mut back = StrutPath::start(back_start, geo.seg_length);
    back.strut(d - 90.0 - alpha);
    back.strut(d + 90.0);
    back.strut(d + 150.0 - alpha);
    back.hop(&[d - 30.0 - alpha]);
    back.strut(d + 150.0);
    back.strut(d - 150.0 - alpha);
    back.hop(&[d + 30.0 - alpha]);
    back.strut(d - 150.0);
    back.strut(d - 90.0);
    back.strut(d - 30.0);
    back.strut(d + 30.0);
    back.hop(&[d + 90.0, d + 150.0, d - 150.0]);

    UnitCell {
        lattice_id: LatticeId::M2,
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
            count: geo.units_y,
            pitch_y: 2.0 * offsets.row_offset_y,
            alternate_shift_x: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deviation_vanishes_at_zero_and_grows() {
        assert!(m2_deviation_deg(0.0).abs() < 1e-12);
        assert!(m2_deviation_deg(60.0) > m2_deviation_deg(30.0));
    }

    #[test]
    fn test_unit_shape() {
        let cell = build(&CellGeometry {
            alpha: 45.0,
            seg_length: 2.0,
            units_x: 4,
            units_y: 2,
        });

        assert_eq!(cell.steps.len(), 21);
        assert_eq!(cell.steps.point_count(), 15);
        match &cell.return_row {
            ReturnRow::Unit { steps, copies } => {
                assert_eq!(steps.len(), 21);
                assert_eq!(*copies, 4);
            }
            other => panic!("unexpected return row {other:?}"),
        }
        assert_eq!(cell.strips.count, 2);
        assert!(cell.strips.alternate_shift_x.is_none());
    }
}
