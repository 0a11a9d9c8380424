//! Geometry primitives
//!
//! Points, displacement vectors, and the "polar step" every lattice family
//! is built from. Angles handed to [`Point::polar_step`] and
//! [`Point::reflect_xy_polar`] are in degrees, matching the way the lattice
//! formulas are written; [`Point::rotate_about`] takes radians because its
//! angle comes straight out of `atan`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Absolute tolerance used when comparing coordinates.
pub const GEOMETRY_TOLERANCE: f64 = 1e-9;

/// A toolpath waypoint in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && z.is_finite(),
            "Point coordinates must be finite: x={x}, y={y}, z={z}"
        );
        Self { x, y, z }
    }

    /// The origin.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Creates a point on the build plate (z = 0).
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// Extends from this point by `length` at `angle_deg` in the XY plane.
    ///
    /// z is carried over unchanged.
    pub fn polar_step(&self, length: f64, angle_deg: f64) -> Point {
        let angle = angle_deg.to_radians();
        Point {
            x: self.x + length * angle.cos(),
            y: self.y + length * angle.sin(),
            z: self.z,
        }
    }

    /// Rotates this point about `centre` by `angle_rad` in the XY plane.
    pub fn rotate_about(&self, centre: &Point, angle_rad: f64) -> Point {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        let dx = self.x - centre.x;
        let dy = self.y - centre.y;
        Point {
            x: centre.x + dx * cos_a - dy * sin_a,
            y: centre.y + dx * sin_a + dy * cos_a,
            z: self.z,
        }
    }

    /// Mirrors this point across the line through `mirror` at `angle_deg`.
    pub fn reflect_xy_polar(&self, mirror: &Point, angle_deg: f64) -> Point {
        let (sin_2a, cos_2a) = (2.0 * angle_deg.to_radians()).sin_cos();
        let dx = self.x - mirror.x;
        let dy = self.y - mirror.y;
        Point {
            x: mirror.x + dx * cos_2a + dy * sin_2a,
            y: mirror.y + dx * sin_2a - dy * cos_2a,
            z: self.z,
        }
    }

    /// Whether two points coincide within [`GEOMETRY_TOLERANCE`] scaled by `scale`.
    pub fn approx_eq(&self, other: &Point, scale: f64) -> bool {
        self.distance_to(other) <= GEOMETRY_TOLERANCE * scale.max(1.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3} Z:{:.3}", self.x, self.y, self.z)
    }
}

/// A displacement used for translation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Vector {
    /// Creates a new displacement.
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    /// Displacement along x only.
    pub fn x(dx: f64) -> Self {
        Self::new(dx, 0.0, 0.0)
    }

    /// Displacement along y only.
    pub fn y(dy: f64) -> Self {
        Self::new(0.0, dy, 0.0)
    }

    /// Displacement along z only.
    pub fn z(dz: f64) -> Self {
        Self::new(0.0, 0.0, dz)
    }

    /// Length of the displacement.
    pub fn length(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy + self.dz * self.dz).sqrt()
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point {
            x: self.x + v.dx,
            y: self.y + v.dy,
            z: self.z + v.dz,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.dx + other.dx, self.dy + other.dy, self.dz + other.dz)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        Vector::new(self.dx * k, self.dy * k, self.dz * k)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy, -self.dz)
    }
}
