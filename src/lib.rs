//! # LatticeKit
//!
//! A toolpath generator for star-polygon lattices printed on extrusion 3D
//! printers. Four lattice families (M1 to M4) are built from closed-form
//! unit cells, tiled into continuous-stroke layers and stacked.
//!
//! ## Architecture
//!
//! LatticeKit is organized as a workspace with multiple crates:
//!
//! 1. **latticekit-core** - Geometry, the waypoint stream, parameters, errors
//! 2. **latticekit-toolpath** - Unit cells, tiling, stacking, finalization, export
//! 3. **latticekit-settings** - Configuration defaults and JSON/TOML persistence
//! 4. **latticekit** - Main binary that integrates all crates

pub mod overrides;

pub use latticekit_core::{
    Annotation, Error, ExtrusionState, LatticeError, LatticeId, LatticeParameters, OutputMode,
    Point, PreviewStyle, PrinterModel, PrinterSettings, Result, Vector, Waypoint,
    WaypointSequence,
};

pub use latticekit_toolpath::{
    DesignExporter, JsonExporter, LatticeDesign, LatticeGenerator, LatticeToolpath, TilingEngine,
    UnitCell, UnitCellBuilder,
};

pub use latticekit_settings::{Config, OutputSettings, SettingsError};

pub use overrides::LatticeOverrides;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Generates the design described by `config`.
pub fn generate_design(config: &Config) -> Result<LatticeDesign> {
    config.validate()?;
    let toolpath = LatticeGenerator::new(config.lattice.clone())?.generate(config.output.mode)?;
    Ok(LatticeDesign::new(
        config.output.design_name.clone(),
        toolpath,
        &config.lattice,
        config.printer.clone(),
        config.output.preview_style,
    ))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so exported designs can go to stdout
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_level(tracing::Level::INFO)
}

/// Initialize logging, `level` applying wherever RUST_LOG says nothing
pub fn init_logging_with_level(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
