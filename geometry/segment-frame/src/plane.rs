//! Planes and plane intersection.
//!
//! The roll convention for segment frames is defined through a plane
//! intersection, so the plane type lives here rather than in a wider
//! geometry kit. Normals are stored unit length.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An infinite line in 3D space, defined by a point and a unit direction.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// A point on the line.
    pub point: Point3<f64>,
    /// Direction of the line (unit vector).
    pub direction: Vector3<f64>,
}

/// An infinite plane in 3D space, defined by a point and a unit normal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3<f64>,
    /// Normal of the plane (unit vector).
    pub normal: Vector3<f64>,
}

impl Plane {
    /// Creates a plane from a point and a normal.
    ///
    /// The normal is normalized. Returns `None` if it is too short to
    /// normalize.
    #[must_use]
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let normal = normal.try_normalize(f64::EPSILON)?;
        Some(Self { point, normal })
    }

    /// Creates the horizontal plane at height `z`, with the normal pointing
    /// up the +Z axis.
    #[must_use]
    pub fn horizontal(z: f64) -> Self {
        Self {
            point: Point3::new(0.0, 0.0, z),
            normal: Vector3::z(),
        }
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive on the side the normal points into.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&(point - self.point))
    }

    /// Returns `true` if the point lies on the plane within `tolerance`.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>, tolerance: f64) -> bool {
        self.signed_distance(point).abs() <= tolerance
    }

    /// The plane constant `d` in the implicit form `n . p = d`.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.normal.dot(&self.point.coords)
    }

    /// Intersects two planes, returning the common line.
    ///
    /// Returns `None` when the planes are parallel, whether they are
    /// coincident or disjoint. The line direction is `n1 x n2` normalized,
    /// so swapping the operands flips it.
    #[must_use]
    pub fn intersection(&self, other: &Plane) -> Option<Line> {
        let cross = self.normal.cross(&other.normal);
        let direction = cross.try_normalize(f64::EPSILON)?;

        // Solve for the point p = c1*n1 + c2*n2 that lies on both planes.
        // For unit normals the denominator is |n1 x n2|^2.
        let denom = cross.norm_squared();
        let dot = self.normal.dot(&other.normal);
        let d1 = self.d();
        let d2 = other.d();
        let coords =
            (self.normal * (d1 - d2 * dot) + other.normal * (d2 - d1 * dot)) / denom;

        Some(Line {
            point: Point3::from(coords),
            direction,
        })
    }
}
