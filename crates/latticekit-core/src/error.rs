//! Error handling for LatticeKit
//!
//! Provides the error types shared by every pipeline stage:
//! - Lattice errors (parameter validation and variant selection)
//! - The umbrella [`Error`] used by public APIs that also touch I/O
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Lattice error type
///
/// Raised while validating a parameter set, before any geometry is built.
/// A failure aborts the whole run; no partial waypoint sequence is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// A scalar parameter is outside its physical range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The requested lattice family does not exist
    #[error("Unsupported lattice variant: {id}")]
    UnsupportedVariant {
        /// The identifier that was requested.
        id: String,
    },
}

impl LatticeError {
    /// Create an invalid parameter error
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        LatticeError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported variant error
    pub fn unsupported(id: impl Into<String>) -> Self {
        LatticeError::UnsupportedVariant { id: id.into() }
    }
}

/// Main error type for LatticeKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Lattice error
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a parameter validation error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::Lattice(LatticeError::InvalidParameter { .. }))
    }

    /// Check if this is an unsupported variant error
    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, Error::Lattice(LatticeError::UnsupportedVariant { .. }))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
