//! Orthonormal placement frames derived from segments.
//!
//! A [`SegmentFrame`] fixes how an asset oriented along the canonical +X
//! axis sits on a segment in world space. The X axis always points from
//! the segment start to its end. The remaining two axes are not free: the
//! roll around the segment is pinned by intersecting the plane
//! perpendicular to the segment at its start with the horizontal plane
//! through its end, which keeps every placement deterministic.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};
use crate::plane::Plane;

/// Right-handed orthonormal frame anchored at the start of a segment.
///
/// Axes are unit length and mutually orthogonal by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentFrame {
    /// Frame origin, the segment start point.
    pub origin: Point3<f64>,
    /// Unit vector from the segment start toward its end.
    pub x_axis: Vector3<f64>,
    /// Unit vector completing the frame, perpendicular to `x_axis`.
    pub y_axis: Vector3<f64>,
    /// Unit vector `x_axis x y_axis`.
    pub z_axis: Vector3<f64>,
}

impl SegmentFrame {
    /// Derives the placement frame for the segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DegenerateSegment`] when the endpoints
    /// coincide (within `f64::EPSILON`), since such a segment has no
    /// direction.
    pub fn from_segment(start: Point3<f64>, end: Point3<f64>) -> FrameResult<Self> {
        let x_axis = (end - start)
            .try_normalize(f64::EPSILON)
            .ok_or_else(|| FrameError::degenerate(&start))?;

        let roll = roll_direction(start, x_axis, end.z);

        // Negating the roll pair keeps a horizontal +X segment on the
        // world basis.
        let y_axis = -roll;
        let z_axis = -x_axis.cross(&roll);

        Ok(Self {
            origin: start,
            x_axis,
            y_axis,
            z_axis,
        })
    }

    /// Maps a point from frame-local coordinates into world space.
    #[must_use]
    pub fn local_to_world(&self, local: &Point3<f64>) -> Point3<f64> {
        self.origin
            + self.x_axis * local.x
            + self.y_axis * local.y
            + self.z_axis * local.z
    }

    /// Checks that the axes are unit length and mutually orthogonal
    /// within `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        (self.x_axis.norm() - 1.0).abs() <= tolerance
            && (self.y_axis.norm() - 1.0).abs() <= tolerance
            && (self.z_axis.norm() - 1.0).abs() <= tolerance
            && self.x_axis.dot(&self.y_axis).abs() <= tolerance
            && self.y_axis.dot(&self.z_axis).abs() <= tolerance
            && self.z_axis.dot(&self.x_axis).abs() <= tolerance
    }

    /// Returns `true` if the frame is right-handed within `tolerance`.
    #[must_use]
    pub fn is_right_handed(&self, tolerance: f64) -> bool {
        (self.x_axis.cross(&self.y_axis) - self.z_axis).norm() <= tolerance
    }
}

/// Roll reference for a segment with unit direction `direction`.
///
/// This is the direction of the line where the plane perpendicular to the
/// segment at `start` meets the horizontal plane at the end height. For a
/// vertical segment those planes are parallel, and the roll falls back to
/// the canonical +X axis.
fn roll_direction(start: Point3<f64>, direction: Vector3<f64>, end_z: f64) -> Vector3<f64> {
    let section = Plane {
        point: start,
        normal: direction,
    };
    match section.intersection(&Plane::horizontal(end_z)) {
        Some(line) => line.direction,
        None => Vector3::x(),
    }
}
