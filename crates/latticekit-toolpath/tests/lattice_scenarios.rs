use latticekit_core::{
    ExtrusionState, LatticeError, LatticeId, LatticeParameters, OutputMode, Point, Waypoint,
};
use latticekit_toolpath::{
    is_printable_seam, LatticeGenerator, TilingEngine, UnitCellBuilder, FIRST_LAYER_GAP_FACTOR,
};

fn scenario_a() -> LatticeParameters {
    LatticeParameters {
        lattice_id: LatticeId::M1,
        alpha: 30.0,
        seg_length: 4.33,
        units_x: 2,
        units_y: 1,
        layers: 1,
        ..LatticeParameters::default()
    }
}

fn close(a: &Point, b: &Point) -> bool {
    a.distance_to(b) < 1e-9
}

#[test]
fn test_m1_single_strip_point_counts() {
    let params = scenario_a();
    let cell = UnitCellBuilder::new(&params).unwrap().build();
    assert_eq!(cell.steps.point_count(), 4);

    let engine = TilingEngine::new(&cell);
    let row_one = engine.row_one();
    let row_two = engine.row_two(&row_one);
    assert_eq!(row_one.point_count(), 8);
    assert_eq!(row_two.point_count(), 8);

    let layer = engine.tile();
    assert_eq!(layer.strip_count, 1);
    assert_eq!(layer.path.point_count(), 16);

    let generator = LatticeGenerator::new(params).unwrap();
    assert_eq!(generator.layer().unwrap().point_count(), 19);
    assert_eq!(
        generator
            .generate(OutputMode::Export)
            .unwrap()
            .steps
            .point_count(),
        19
    );
}

#[test]
fn test_m1_return_row_mirrors_row_one() {
    let cell = UnitCellBuilder::new(&scenario_a()).unwrap().build();
    let engine = TilingEngine::new(&cell);
    let row_one: Vec<Point> = engine.row_one().points().copied().collect();
    let row_two: Vec<Point> = engine
        .row_two(&engine.row_one())
        .points()
        .copied()
        .collect();

    for (i, p) in row_two.iter().enumerate() {
        let source = row_one[row_one.len() - 1 - i];
        assert!(close(p, &Point::xy(source.x, -source.y)), "row 2 point {i}");
    }
    // row 2 starts where row 1 ends
    assert!(close(&row_two[0], &row_one[row_one.len() - 1]));
}

#[test]
fn test_m4_one_fifty_matches_one_twenty() {
    let at = |alpha: f64| {
        let params = LatticeParameters {
            lattice_id: LatticeId::M4,
            alpha,
            ..LatticeParameters::default()
        };
        LatticeGenerator::new(params)
            .unwrap()
            .generate(OutputMode::Export)
            .unwrap()
    };

    let clamped = at(150.0);
    let direct = at(120.0);
    assert_eq!(clamped.alpha, 120.0);
    assert_eq!(clamped, direct);
}

#[test]
fn test_m4_odd_units_y_rounds_up() {
    for (units_y, strips) in [(1, 1), (2, 1), (3, 2), (4, 2), (5, 3)] {
        let params = LatticeParameters {
            lattice_id: LatticeId::M4,
            units_y,
            ..LatticeParameters::default()
        };
        let toolpath = LatticeGenerator::new(params)
            .unwrap()
            .generate(OutputMode::Export)
            .unwrap();
        assert_eq!(toolpath.strip_count, strips, "units_y {units_y}");
    }
}

#[test]
fn test_tile_seams_coincide() {
    for id in LatticeId::ALL {
        let params = LatticeParameters {
            lattice_id: id,
            alpha: 60.0,
            units_x: 4,
            ..LatticeParameters::default()
        };
        let cell = UnitCellBuilder::new(&params).unwrap().build();
        let row = TilingEngine::new(&cell).row_one();
        let per_unit = cell.steps.point_count();
        let pts: Vec<Point> = row.points().copied().collect();

        assert_eq!(pts.len(), per_unit * 4, "{id}");
        for i in 1..4 {
            assert!(
                close(&pts[i * per_unit - 1], &pts[i * per_unit]),
                "{id}: copy {i} does not start where copy {} ends",
                i - 1
            );
        }
    }
}

#[test]
fn test_row_two_joins_printably_or_by_travel() {
    for id in LatticeId::ALL {
        let params = LatticeParameters {
            lattice_id: id,
            alpha: 45.0,
            units_x: 3,
            ..LatticeParameters::default()
        };
        let cell = UnitCellBuilder::new(&params).unwrap().build();
        let engine = TilingEngine::new(&cell);
        let row_one = engine.row_one();
        let row_two = engine.row_two(&row_one);
        let strip = engine.strip();

        let end = row_one.last_point().unwrap();
        let start = row_two.first_point().unwrap();
        if is_printable_seam(end.distance_to(start), params.seg_length) {
            assert_eq!(strip.len(), row_one.len() + row_two.len(), "{id}");
        } else {
            assert_eq!(strip.len(), row_one.len() + row_two.len() + 2, "{id}");
            assert_eq!(
                strip.as_slice()[row_one.len()],
                Waypoint::SetExtrusion {
                    state: ExtrusionState::Traveling
                }
            );
        }
        assert_eq!(
            strip.point_count(),
            row_one.point_count() + row_two.point_count()
        );
    }
}

#[test]
fn test_layers_stack_in_z_after_placement() {
    let params = LatticeParameters {
        lattice_id: LatticeId::M2,
        layers: 3,
        extrusion_height: 0.25,
        start_x: 10.0,
        start_y: 20.0,
        ..LatticeParameters::default()
    };
    let generator = LatticeGenerator::new(params).unwrap();
    let layer = generator.layer().unwrap();
    let toolpath = generator.generate(OutputMode::Export).unwrap();

    assert_eq!(toolpath.steps.len(), 3 * layer.len());
    let per_layer = layer.point_count();
    for (i, p) in toolpath.steps.points().enumerate() {
        let expected = FIRST_LAYER_GAP_FACTOR * 0.25 + (i / per_layer) as f64 * 0.25;
        assert!((p.z - expected).abs() < 1e-9, "point {i} at z {}", p.z);
    }
}

#[test]
fn test_placement_and_closure() {
    let params = scenario_a();
    let generator = LatticeGenerator::new(params.clone()).unwrap();
    let cell = generator.unit_cell().unwrap();
    let toolpath = generator.generate(OutputMode::Export).unwrap();
    let pts: Vec<Point> = toolpath.steps.points().copied().collect();
    let z = FIRST_LAYER_GAP_FACTOR * params.extrusion_height;

    assert!(close(&pts[0], &Point::new(params.start_x, params.start_y, z)));

    let n = pts.len();
    let back_x = params.start_x - cell.offsets.repeat_offset_x;
    assert!((pts[n - 3].x - back_x).abs() < 1e-9);
    assert!((pts[n - 3].y - pts[n - 4].y).abs() < 1e-9);
    assert!(close(&pts[n - 2], &Point::new(back_x, params.start_y, z)));
    assert!(close(&pts[n - 1], &Point::new(params.start_x, params.start_y, z)));
}

#[test]
fn test_preview_is_an_ordered_subset_of_export() {
    for id in LatticeId::ALL {
        let params = LatticeParameters {
            lattice_id: id,
            units_x: 3,
            units_y: 2,
            ..LatticeParameters::default()
        };
        let generator = LatticeGenerator::new(params).unwrap();
        let export = generator.generate(OutputMode::Export).unwrap();
        let preview = generator.generate(OutputMode::Visualize).unwrap();

        assert!(preview.steps.point_count() <= export.steps.point_count());
        assert!(preview.steps.iter().all(|s| matches!(s, Waypoint::Point(_))));

        let mut printed = export
            .steps
            .visits()
            .filter(|v| v.state == ExtrusionState::Depositing)
            .map(|v| v.point);
        for p in preview.steps.points() {
            assert!(printed.any(|q| q == *p), "{id}: preview reorders points");
        }
    }
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let params = LatticeParameters {
        alpha: 0.0,
        ..LatticeParameters::default()
    };
    match LatticeGenerator::new(params) {
        Err(LatticeError::InvalidParameter { name, .. }) => assert_eq!(name, "alpha"),
        other => panic!("expected alpha to be rejected, got {other:?}"),
    }

    assert_eq!(
        "M5".parse::<LatticeId>(),
        Err(LatticeError::UnsupportedVariant {
            id: "M5".to_string()
        })
    );
}
