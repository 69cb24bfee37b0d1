//! Error types for skeleton conversion.

use segment_frame::FrameError;
use thiserror::Error;

/// Result type for skeleton operations.
pub type SkeletonResult<T> = Result<T, SkeletonError>;

/// Errors that can occur while building templates or placing them on edges.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkeletonError {
    /// A strut template was built without any strands.
    #[error("strut template has no strands")]
    EmptyTemplate,

    /// A template strand has fewer than the two points needed to draw it.
    #[error("template strand {index} has {points} point(s), need at least 2")]
    ShortStrand {
        /// Index of the offending strand.
        index: usize,
        /// Number of points the strand actually has.
        points: usize,
    },

    /// A template was registered under a name that is already taken.
    #[error("template {name:?} is already registered")]
    DuplicateTemplate {
        /// The contested template name.
        name: String,
    },

    /// Placement failed because the edge has no usable direction.
    #[error(transparent)]
    Frame(#[from] FrameError),
}
