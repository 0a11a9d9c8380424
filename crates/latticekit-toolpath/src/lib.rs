//! # LatticeKit Toolpath
//!
//! This crate turns lattice parameters into a continuous-stroke, multi-layer
//! toolpath for star-polygon lattices.
//!
//! ## Pipeline
//!
//! - **Unit Cell Builder**: closed-form construction of the M1 to M4 unit cells and their tiling offsets
//! - **Tiling Engine**: replicates a unit cell into rows, strips and a full layer
//! - **Layer Stacker**: repeats a layer in Z
//! - **Path Finalizer**: closure moves, bed placement and preview reduction
//!
//! ## Hand-off
//!
//! - **Lattice Design**: the toolpath bundled with print settings and annotations
//! - **Exporters**: the [`DesignExporter`] seam and a JSON implementation

pub mod design;
pub mod export;
pub mod finalize;
pub mod generator;
pub mod layers;
pub mod tiling;
pub mod unit_cell;

// Re-export commonly used items
pub use design::LatticeDesign;
pub use export::{DesignExporter, JsonExporter};
pub use finalize::{preview_path, PathFinalizer, FIRST_LAYER_GAP_FACTOR};
pub use generator::{LatticeGenerator, LatticeToolpath};
pub use layers::LayerStacker;
pub use tiling::{is_printable_seam, TiledLayer, TilingEngine, TilingStats, SEAM_TOLERANCE};
pub use unit_cell::{
    m2_deviation_deg, m4_deviation_deg, ReturnRow, StripLayout, TilingOffsets, UnitCell,
    UnitCellBuilder,
};
