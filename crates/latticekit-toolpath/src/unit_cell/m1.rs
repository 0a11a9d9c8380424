//! M1: three-strut zig-zag whose return row is the mirror image of row 1

use super::{CellGeometry, ReturnRow, StripLayout, StrutPath, TilingOffsets, UnitCell};
use latticekit_core::{LatticeId, Point};

pub(super) fn build(geo: &CellGeometry) -> UnitCell {
    let half = geo.alpha / 2.0;

    let mut path = StrutPath::start(Point::origin(), geo.seg_length);
    let p1 = path.strut(-half);
    let p2 = path.strut(-60.0 + half);
    let p3 = path.strut(120.0 - half);

    let offsets = TilingOffsets {
        repeat_offset_x: p3.x,
        row_offset_x: -(p2.x - p1.x),
        row_offset_y: -(p1.y + p2.y),
    };

    UnitCell {
        lattice_id: LatticeId::M1,
        alpha: geo.alpha,
        seg_length: geo.seg_length,
        units_x: geo.units_x,
        steps: path.finish(),
        offsets,
        return_row: ReturnRow::Reflected,
        strips: StripLayout {
            count: 2 * geo.units_y - 1,
            pitch_y: offsets.row_offset_y,
            alternate_shift_x: Some(offsets.row_offset_x),
        },
    }
}
