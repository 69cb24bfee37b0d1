//! Wireframe input: the edges to be replaced by struts.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight edge between two points in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Edge start point.
    pub start: Point3<f64>,
    /// Edge end point.
    pub end: Point3<f64>,
}

impl Edge {
    /// Creates an edge between two points.
    #[must_use]
    pub const fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Unit direction from start to end, or `None` for degenerate edges.
    #[must_use]
    pub fn direction(&self) -> Option<Vector3<f64>> {
        (self.end - self.start).try_normalize(f64::EPSILON)
    }

    /// Returns `true` if the endpoints coincide and the edge cannot carry
    /// a strut.
    ///
    /// Uses the same criterion as placement itself, so a non-degenerate
    /// edge is guaranteed to place.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction().is_none()
    }
}

/// An ordered collection of edges.
///
/// Edges are independent: they do not need to connect, and duplicates are
/// kept as given. Conversion preserves this order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wireframe {
    edges: Vec<Edge>,
}

impl Wireframe {
    /// Creates an empty wireframe.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Creates a wireframe from a list of edges.
    #[must_use]
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Creates a wireframe by chaining consecutive polyline points into
    /// edges.
    ///
    /// A polyline with fewer than two points yields an empty wireframe.
    #[must_use]
    pub fn from_polyline(points: &[Point3<f64>]) -> Self {
        let edges = points
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect();
        Self { edges }
    }

    /// Appends an edge.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// The edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the wireframe has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
