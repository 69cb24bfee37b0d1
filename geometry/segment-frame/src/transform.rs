//! Homogeneous placement transforms built from segment frames.

use nalgebra::{Matrix4, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FrameResult;
use crate::frame::SegmentFrame;

/// An affine placement transform stored as a 4x4 homogeneous matrix.
///
/// Built from a [`SegmentFrame`] the transform is rigid. Composing in a
/// length scale via [`with_length_scale`](Self::with_length_scale) makes it
/// affine along the local X axis only.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentTransform {
    matrix: Matrix4<f64>,
}

impl SegmentTransform {
    /// Creates the identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wraps an existing homogeneous matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Builds the rigid transform that maps frame-local coordinates into
    /// world space: the frame axes become the rotation columns and the
    /// frame origin the translation.
    #[must_use]
    pub fn from_frame(frame: &SegmentFrame) -> Self {
        Self {
            matrix: Matrix4::from_columns(&[
                frame.x_axis.to_homogeneous(),
                frame.y_axis.to_homogeneous(),
                frame.z_axis.to_homogeneous(),
                frame.origin.to_homogeneous(),
            ]),
        }
    }

    /// Pre-composes a non-uniform scale of `(length, 1, 1)` in local
    /// space, so a unit-length asset along local +X spans `length` after
    /// placement.
    #[must_use]
    pub fn with_length_scale(self, length: f64) -> Self {
        let scale = Matrix4::new_nonuniform_scaling(&Vector3::new(length, 1.0, 1.0));
        Self {
            matrix: self.matrix * scale,
        }
    }

    /// The underlying homogeneous matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Applies the transform to a vector (no translation).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transform_vector(vector)
    }

    /// Composes two transforms: `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Computes the inverse transform, if the matrix is invertible.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for SegmentTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Computes the rigid placement transform for the segment from `start` to
/// `end`.
///
/// The transform maps the canonical frame at the world origin onto the
/// segment's [`SegmentFrame`]: local `(0, 0, 0)` lands on `start`, and the
/// local +X direction points at `end`.
///
/// Pure rotation and translation. Unit-length assets also need the segment
/// length composed in with
/// [`with_length_scale`](SegmentTransform::with_length_scale);
/// [`unit_segment_placement`] does both in one call.
///
/// # Errors
///
/// Returns [`FrameError::DegenerateSegment`](crate::FrameError::DegenerateSegment)
/// when the endpoints coincide.
pub fn segment_transform(
    start: Point3<f64>,
    end: Point3<f64>,
) -> FrameResult<SegmentTransform> {
    let frame = SegmentFrame::from_segment(start, end)?;
    Ok(SegmentTransform::from_frame(&frame))
}

/// Computes the placement transform for a unit-length asset spanning the
/// segment from `start` to `end`.
///
/// This is [`segment_transform`] with the segment length pre-composed as a
/// local X scale: local `(0, 0, 0)` lands on `start` and local `(1, 0, 0)`
/// lands on `end`, while local Y and Z stay unscaled.
///
/// # Errors
///
/// Returns [`FrameError::DegenerateSegment`](crate::FrameError::DegenerateSegment)
/// when the endpoints coincide.
pub fn unit_segment_placement(
    start: Point3<f64>,
    end: Point3<f64>,
) -> FrameResult<SegmentTransform> {
    let length = (end - start).norm();
    Ok(segment_transform(start, end)?.with_length_scale(length))
}
