//! # LatticeKit Core
//!
//! Core types and utilities for LatticeKit.
//! Provides the geometry primitives, the waypoint stream handed between
//! pipeline stages, the lattice parameter model, and the error types.

pub mod data;
pub mod error;
pub mod geometry;
pub mod params;
pub mod waypoint;

pub use data::{
    Annotation, OutputMode, PreviewStyle, PrinterModel, PrinterSettings, DEFAULT_DESIGN_NAME,
};

pub use error::{Error, LatticeError, Result};

pub use geometry::{Point, Vector, GEOMETRY_TOLERANCE};

pub use params::{LatticeId, LatticeParameters};

pub use waypoint::{ExtrusionState, Visit, Waypoint, WaypointSequence};
