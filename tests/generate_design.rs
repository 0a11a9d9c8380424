use latticekit::{
    generate_design, Config, DesignExporter, JsonExporter, LatticeDesign, LatticeId,
    LatticeOverrides, OutputMode, Waypoint,
};
use tempfile::TempDir;

#[test]
fn test_config_file_to_exported_design() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lattice.toml");
    let output_path = dir.path().join("design.json");

    Config::default().save_to_file(&config_path).unwrap();
    let overrides = LatticeOverrides {
        lattice: Some(LatticeId::M3),
        units_x: Some(3),
        units_y: Some(2),
        mode: Some(OutputMode::Export),
        ..LatticeOverrides::default()
    };
    let config = overrides.apply(Config::load_from_file(&config_path).unwrap());

    let design = generate_design(&config).unwrap();
    let mut file = std::fs::File::create(&output_path).unwrap();
    JsonExporter::pretty().export(&design, &mut file).unwrap();

    let text = std::fs::read_to_string(&output_path).unwrap();
    let back: LatticeDesign = serde_json::from_str(&text).unwrap();
    assert_eq!(back.name, design.name);
    assert_eq!(back.lattice_id, LatticeId::M3);
    assert_eq!(back.steps.len(), design.steps.len());
    for (a, b) in back.steps.points().zip(design.steps.points()) {
        assert!(a.distance_to(b) < 1e-9);
    }
    assert!(back
        .steps
        .iter()
        .any(|s| matches!(s, Waypoint::SetExtrusion { .. })));
}

#[test]
fn test_visualize_design_has_no_markers() {
    let config = LatticeOverrides {
        lattice: Some(LatticeId::M2),
        mode: Some(OutputMode::Visualize),
        ..LatticeOverrides::default()
    }
    .apply(Config::default());

    let design = generate_design(&config).unwrap();
    assert_eq!(design.mode, OutputMode::Visualize);
    assert!(design.steps.iter().all(|s| matches!(s, Waypoint::Point(_))));
    assert_eq!(design.annotations.len(), 3);
}
