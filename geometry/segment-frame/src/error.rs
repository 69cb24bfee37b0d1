//! Error types for segment frame construction.

use nalgebra::Point3;
use thiserror::Error;

/// Result type for segment frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors that can occur when deriving a placement frame from a segment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameError {
    /// The segment endpoints coincide, so it has no direction and no frame.
    #[error("degenerate segment: endpoints coincide at ({x}, {y}, {z})")]
    DegenerateSegment {
        /// X coordinate of the coincident endpoints.
        x: f64,
        /// Y coordinate of the coincident endpoints.
        y: f64,
        /// Z coordinate of the coincident endpoints.
        z: f64,
    },
}

impl FrameError {
    /// Creates a [`FrameError::DegenerateSegment`] for the given point.
    #[must_use]
    pub fn degenerate(point: &Point3<f64>) -> Self {
        Self::DegenerateSegment {
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}
