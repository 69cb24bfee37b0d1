//! Replace wireframe edges with placed copies of a strut template.
//!
//! Feed in a [`Wireframe`] (any bag of straight edges) and a
//! [`StrutTemplate`] (geometry authored along the unit X segment), and get
//! back a [`Skeleton`]: one placed copy of the template per edge, plus an
//! accounting of what was replaced and what was skipped. Placement is
//! handled by [`segment-frame`](segment_frame), so equal wireframes always
//! convert to equal skeletons.
//!
//! - **Wireframes**: ordered edge lists, buildable from polylines
//! - **Templates**: multi-strand canonical-pose geometry with validation
//! - **Template library**: a named cache so repeated conversions build
//!   each template once
//! - **Conversion**: infallible batch placement with skip accounting
//!
//! Degenerate edges (coincident endpoints) cannot carry a strut. The batch
//! conversion skips and counts them instead of failing, so one bad edge
//! never poisons a wireframe.
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Point3;
//! use skeleton_from_edges::{StrutTemplate, Wireframe, skeleton_from_wireframe};
//!
//! let wireframe = Wireframe::from_polyline(&[
//!     Point3::origin(),
//!     Point3::new(10.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 6.0),
//! ]);
//!
//! let skeleton = skeleton_from_wireframe(&wireframe, &StrutTemplate::unit_segment());
//!
//! assert_eq!(skeleton.replaced_edges, 2);
//! assert_eq!(skeleton.skipped_edges, 0);
//! println!("{skeleton}");
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: enables serialization for wireframes, templates, and
//!   skeletons

#![doc(html_root_url = "https://docs.rs/skeleton-from-edges/0.1.0")]
#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod convert;
mod error;
mod template;
mod wireframe;

pub use convert::{Skeleton, place_edge, skeleton_from_edges, skeleton_from_wireframe};
pub use error::{SkeletonError, SkeletonResult};
pub use template::{StrutTemplate, TemplateLibrary};
pub use wireframe::{Edge, Wireframe};

// Re-exported so callers can match placement failures and name points
// without importing the geometry crates directly.
pub use nalgebra::Point3;
pub use segment_frame::FrameError;
