//! M3: hexagonal star cell, rotated flat after construction
//!
//! The raw walk drifts in Y from one copy to the next. Rotating it about its
//! first strut end, so that point and the end of the third group sit at the
//! same height, makes copies line up along X.

use super::{CellGeometry, ReturnRow, StripLayout, StrutPath, TilingOffsets, UnitCell};
use latticekit_core::{ExtrusionState, LatticeId, Point, Vector, WaypointSequence};

pub(super) fn build(geo: &CellGeometry) -> UnitCell {
    let alpha = geo.alpha;
    let origin = Point::origin();

    let mut path = StrutPath::start(origin, geo.seg_length);
    let pivot = path.strut(120.0);
    let crest = path.strut(0.0);
    let top = path.strut(180.0 - alpha);
    path.hop(&[-alpha]);
    path.strut(-120.0);
    let elbow = path.strut(60.0 - alpha);
    let low = path.strut(-120.0);
    let base = path.strut(0.0);
    let rise = path.strut(120.0);
    path.hop(&[-60.0]);
    let level = path.strut(120.0 - alpha);
    let next = path.hop(&[-60.0]);

    let rotation = -((level.y - pivot.y) / (level.x - pivot.x)).atan();
    let turn = |p: Point| p.rotate_about(&pivot, rotation);
    let steps = path.finish().map_points(|p| turn(*p));

    let (origin, crest, top) = (turn(origin), turn(crest), turn(top));
    let (elbow, low, base, rise) = (turn(elbow), turn(low), turn(base), turn(rise));
    let next = turn(next);

    let repeat_offset_x = next.x - origin.x;
    let row_offset_y = top.y - low.y;
    let row_offset_x = top.x - low.x;
    let back_shift = Vector::new(
        row_offset_x + (geo.units_x + 1) as f64 * repeat_offset_x,
        row_offset_y,
        0.0,
    );
    let behind = |p: Point| p + Vector::x(-repeat_offset_x);

    // The return unit retraces selected corners of the rotated cell
    let mut back = WaypointSequence::with_capacity(19);
    for p in [origin, crest, top] {
        back.push_point(p);
    }
    back.push_state(ExtrusionState::Traveling);
    back.push_point(crest);
    back.push_state(ExtrusionState::Depositing);
    back.push_point(pivot);
    back.push_point(origin);
    back.push_state(ExtrusionState::Traveling);
    back.push_point(pivot);
    back.push_state(ExtrusionState::Depositing);
    back.push_point(behind(base));
    back.push_point(behind(rise));
    back.push_state(ExtrusionState::Traveling);
    back.push_point(behind(base));
    back.push_state(ExtrusionState::Depositing);
    for p in [low, elbow, origin] {
        back.push_point(behind(p));
    }

    let offsets = TilingOffsets {
        repeat_offset_x,
        row_offset_x,
        row_offset_y,
    };

    UnitCell {
        lattice_id: LatticeId::M3,
        alpha,
        seg_length: geo.seg_length,
        units_x: geo.units_x,
        steps,
        offsets,
        return_row: ReturnRow::Unit {
            steps: back.translated(back_shift),
            copies: geo.units_x + 1,
        },
        strips: StripLayout {
            count: geo.units_y,
            pitch_y: 2.0 * row_offset_y,
            alternate_shift_x: None,
        },
    }
}
