//! Lattice parameter model
//!
//! The immutable input to the whole pipeline. The documented guideline
//! ranges are advisory; only the physical validity checks in
//! [`LatticeParameters::validate`] are enforced.

use crate::error::LatticeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Star-polygon lattice sub-family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LatticeId {
    #[default]
    M1,
    M2,
    M3,
    M4,
}

impl LatticeId {
    pub const ALL: [LatticeId; 4] = [LatticeId::M1, LatticeId::M2, LatticeId::M3, LatticeId::M4];

    pub fn as_str(&self) -> &'static str {
        match self {
            LatticeId::M1 => "M1",
            LatticeId::M2 => "M2",
            LatticeId::M3 => "M3",
            LatticeId::M4 => "M4",
        }
    }
}

impl fmt::Display for LatticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LatticeId {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M1" => Ok(LatticeId::M1),
            "M2" => Ok(LatticeId::M2),
            "M3" => Ok(LatticeId::M3),
            "M4" => Ok(LatticeId::M4),
            _ => Err(LatticeError::unsupported(s.trim())),
        }
    }
}

impl TryFrom<String> for LatticeId {
    type Error = LatticeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LatticeId> for String {
    fn from(id: LatticeId) -> Self {
        id.as_str().to_string()
    }
}

/// Geometric and print parameters for one lattice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeParameters {
    /// Lattice sub-family
    pub lattice_id: LatticeId,
    /// Star-polygon corner angle in degrees (guideline 15 to 150)
    pub alpha: f64,
    /// Strut length in mm (guideline 1 to 50)
    pub seg_length: f64,
    /// Unit cells along the length of the lattice (guideline 4 to 15)
    pub units_x: u32,
    /// Unit cells across the width (guideline 1 to 5); M4 rounds this up to even
    pub units_y: u32,
    /// Printed line width in mm
    pub extrusion_width: f64,
    /// Layer thickness in mm
    pub extrusion_height: f64,
    /// Number of layers (guideline 1 to 5)
    pub layers: u32,
    /// Approximate start point of the lattice in X (mm)
    pub start_x: f64,
    /// Approximate start point of the lattice in Y (mm)
    pub start_y: f64,
}

impl Default for LatticeParameters {
    fn default() -> Self {
        Self {
            lattice_id: LatticeId::M1,
            alpha: 30.0,
            seg_length: 4.33,
            units_x: 10,
            units_y: 3,
            extrusion_width: 0.5,
            extrusion_height: 0.2,
            layers: 2,
            start_x: 30.0,
            start_y: 30.0,
        }
    }
}

impl LatticeParameters {
    /// Create parameters for a family, every other field at its default
    pub fn for_lattice(lattice_id: LatticeId) -> Self {
        Self {
            lattice_id,
            ..Self::default()
        }
    }

    /// Validate the geometric parameters needed to build a unit cell and tile it
    pub fn validate_geometry(&self) -> Result<(), LatticeError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 180.0 {
            return Err(LatticeError::invalid(
                "alpha",
                format!("{} is not strictly between 0 and 180 degrees", self.alpha),
            ));
        }

        if !self.seg_length.is_finite() || self.seg_length <= 0.0 {
            return Err(LatticeError::invalid(
                "seg_length",
                format!("{} must be a positive length", self.seg_length),
            ));
        }

        if self.units_x < 1 {
            return Err(LatticeError::invalid("units_x", "must be at least 1"));
        }

        if self.units_y < 1 {
            return Err(LatticeError::invalid("units_y", "must be at least 1"));
        }

        if !self.start_x.is_finite() || !self.start_y.is_finite() {
            return Err(LatticeError::invalid(
                "start",
                format!("({}, {}) is not a finite position", self.start_x, self.start_y),
            ));
        }

        Ok(())
    }

    /// Validate the layer stacking parameters
    pub fn validate_layers(&self) -> Result<(), LatticeError> {
        if self.layers < 1 {
            return Err(LatticeError::invalid("layers", "must be at least 1"));
        }

        if !self.extrusion_height.is_finite() || self.extrusion_height <= 0.0 {
            return Err(LatticeError::invalid(
                "extrusion_height",
                format!("{} must be a positive height", self.extrusion_height),
            ));
        }

        Ok(())
    }

    /// Validate every hard constraint
    pub fn validate(&self) -> Result<(), LatticeError> {
        self.validate_geometry()?;
        self.validate_layers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = LatticeParameters::default();
        assert_eq!(params.lattice_id, LatticeId::M1);
        assert_eq!(params.alpha, 30.0);
        assert_eq!(params.seg_length, 4.33);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_lattice_id_parsing() {
        assert_eq!("M3".parse::<LatticeId>(), Ok(LatticeId::M3));
        assert_eq!(" m4 ".parse::<LatticeId>(), Ok(LatticeId::M4));
        assert_eq!(
            "M5".parse::<LatticeId>(),
            Err(LatticeError::unsupported("M5"))
        );
        assert_eq!(LatticeId::M2.to_string(), "M2");
    }

    #[test]
    fn test_alpha_bounds() {
        for alpha in [0.0, -10.0, 180.0, 200.0, f64::NAN] {
            let params = LatticeParameters {
                alpha,
                ..LatticeParameters::default()
            };
            assert!(
                matches!(
                    params.validate(),
                    Err(LatticeError::InvalidParameter { ref name, .. }) if name == "alpha"
                ),
                "alpha {alpha} should be rejected"
            );
        }

        let params = LatticeParameters {
            alpha: 179.9,
            ..LatticeParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_lengths_and_counts() {
        let cases = [
            (
                LatticeParameters {
                    seg_length: 0.0,
                    ..LatticeParameters::default()
                },
                "seg_length",
            ),
            (
                LatticeParameters {
                    units_x: 0,
                    ..LatticeParameters::default()
                },
                "units_x",
            ),
            (
                LatticeParameters {
                    units_y: 0,
                    ..LatticeParameters::default()
                },
                "units_y",
            ),
            (
                LatticeParameters {
                    layers: 0,
                    ..LatticeParameters::default()
                },
                "layers",
            ),
            (
                LatticeParameters {
                    extrusion_height: -0.2,
                    ..LatticeParameters::default()
                },
                "extrusion_height",
            ),
        ];

        for (params, field) in cases {
            match params.validate() {
                Err(LatticeError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("expected {field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_id_in_serialized_form() {
        let json = r#"{ "lattice_id": "M9", "alpha": 45.0 }"#;
        let err = serde_json::from_str::<LatticeParameters>(json).unwrap_err();
        assert!(err.to_string().contains("Unsupported lattice variant: M9"));

        let json = r#"{ "lattice_id": "M2", "alpha": 45.0 }"#;
        let params: LatticeParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.lattice_id, LatticeId::M2);
        assert_eq!(params.units_x, 10);
    }
}
