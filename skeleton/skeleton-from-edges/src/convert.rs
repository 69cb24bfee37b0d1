//! Edge-to-strut conversion.
//!
//! Each edge gets its own copy of the template, placed by the segment's
//! deterministic frame and stretched along local X to the edge length.
//! Degenerate edges have no frame, so they are counted and skipped rather
//! than failing the batch.

use std::fmt;

use nalgebra::Point3;
use segment_frame::unit_segment_placement;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SkeletonResult;
use crate::template::StrutTemplate;
use crate::wireframe::{Edge, Wireframe};

/// The output of a conversion: placed strands plus edge accounting.
///
/// Every input edge is either replaced (its strands appear in `strands`,
/// in edge order) or skipped, so `replaced_edges + skipped_edges` equals
/// the input edge count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Skeleton {
    /// Placed strands in world space. Strands from one edge are contiguous
    /// and follow the template's strand order; edges follow input order.
    pub strands: Vec<Vec<Point3<f64>>>,
    /// Number of edges that produced strands.
    pub replaced_edges: usize,
    /// Number of degenerate edges that were dropped.
    pub skipped_edges: usize,
}

impl Skeleton {
    /// Number of placed strands.
    #[must_use]
    pub fn strand_count(&self) -> usize {
        self.strands.len()
    }

    /// Returns `true` if no edge produced strands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    /// Total polyline length of all placed strands.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.strands
            .iter()
            .flat_map(|strand| strand.windows(2))
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skeleton: {} strands from {} edges ({} skipped)",
            self.strands.len(),
            self.replaced_edges + self.skipped_edges,
            self.skipped_edges
        )
    }
}

/// Places the template onto a single edge.
///
/// Returns one world-space strand per template strand, in template order.
///
/// # Errors
///
/// Returns [`SkeletonError::Frame`](crate::SkeletonError::Frame) if the
/// edge is degenerate.
pub fn place_edge(
    edge: &Edge,
    template: &StrutTemplate,
) -> SkeletonResult<Vec<Vec<Point3<f64>>>> {
    let placement = unit_segment_placement(edge.start, edge.end)?;
    Ok(template
        .strands()
        .iter()
        .map(|strand| {
            strand
                .iter()
                .map(|point| placement.transform_point(point))
                .collect()
        })
        .collect())
}

/// Converts a batch of edges into a [`Skeleton`].
///
/// Degenerate edges are skipped and counted; the conversion itself never
/// fails. Input order is preserved in the output strands.
#[must_use]
pub fn skeleton_from_edges(edges: &[Edge], template: &StrutTemplate) -> Skeleton {
    let mut strands = Vec::with_capacity(edges.len() * template.strand_count());
    let mut replaced_edges = 0;
    let mut skipped_edges = 0;

    for (index, edge) in edges.iter().enumerate() {
        match place_edge(edge, template) {
            Ok(mut placed) => {
                strands.append(&mut placed);
                replaced_edges += 1;
            }
            Err(error) => {
                skipped_edges += 1;
                debug!(edge = index, error = %error, "Skipping edge without direction");
            }
        }
    }

    if replaced_edges == 0 && !edges.is_empty() {
        warn!(edges = edges.len(), "No edge in the batch had a usable direction");
    } else {
        info!(
            edges = edges.len(),
            replaced = replaced_edges,
            skipped = skipped_edges,
            strands = strands.len(),
            "Converted edges to skeleton"
        );
    }

    Skeleton {
        strands,
        replaced_edges,
        skipped_edges,
    }
}

/// Converts every edge of a wireframe into a [`Skeleton`].
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use skeleton_from_edges::{StrutTemplate, Wireframe, skeleton_from_wireframe};
///
/// let wireframe = Wireframe::from_polyline(&[
///     Point3::origin(),
///     Point3::new(3.0, 0.0, 0.0),
///     Point3::new(3.0, 0.0, 4.0),
/// ]);
///
/// let skeleton = skeleton_from_wireframe(&wireframe, &StrutTemplate::unit_segment());
/// assert_eq!(skeleton.replaced_edges, 2);
/// assert_eq!(skeleton.strand_count(), 2);
/// ```
#[must_use]
pub fn skeleton_from_wireframe(wireframe: &Wireframe, template: &StrutTemplate) -> Skeleton {
    skeleton_from_edges(wireframe.edges(), template)
}
