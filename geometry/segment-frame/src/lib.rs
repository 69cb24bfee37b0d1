//! Deterministic placement frames and transforms for 3D line segments.
//!
//! This crate answers one question: given a segment in world space, where
//! does a template asset authored along the canonical +X axis go? It
//! provides:
//!
//! - **Segment frames**: a right-handed orthonormal basis anchored at the
//!   segment start, with X pointing at the segment end
//! - **Placement transforms**: 4x4 homogeneous matrices that carry
//!   frame-local coordinates into world space
//! - **Length scaling**: an optional local X scale so unit-length assets
//!   span the full segment
//! - **Plane intersection**: the primitive that pins the roll around the
//!   segment axis
//!
//! The roll convention is what makes placements reproducible. The frame's
//! second axis is derived from the line where the plane perpendicular to
//! the segment (at its start) meets the horizontal plane through the
//! segment end. Vertical segments, where those planes are parallel, fall
//! back to the canonical +X axis. Equal inputs therefore always produce
//! identical frames, with no state carried between calls.
//!
//! # Layer 0 Crate
//!
//! This is a foundational crate: pure math over [`nalgebra`] types, no I/O,
//! no scene graph, usable from any pipeline stage.
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Point3;
//! use segment_frame::unit_segment_placement;
//!
//! let start = Point3::new(1.0, 2.0, 0.0);
//! let end = Point3::new(1.0, 2.0, 7.5);
//!
//! let placement = unit_segment_placement(start, end).expect("segment has length");
//!
//! // Local (0, 0, 0) lands on the start, local (1, 0, 0) on the end.
//! let tip = placement.transform_point(&Point3::new(1.0, 0.0, 0.0));
//! assert!((tip - end).norm() < 1e-9);
//! ```
//!
//! # Coordinate System
//!
//! World space is right-handed with +Z up. "Horizontal" planes are planes
//! of constant Z.
//!
//! # Feature Flags
//!
//! - `serde`: enables serialization for all public types

#![doc(html_root_url = "https://docs.rs/segment-frame/0.1.0")]
#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod frame;
mod plane;
mod transform;

pub use error::{FrameError, FrameResult};
pub use frame::SegmentFrame;
pub use plane::{Line, Plane};
pub use transform::{SegmentTransform, segment_transform, unit_segment_placement};

// Re-export the nalgebra types used in the public API.
pub use nalgebra::{Matrix4, Point3, Vector3};
