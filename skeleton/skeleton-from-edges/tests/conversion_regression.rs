//! Regression tests for the conversion contract.
//!
//! These pin the placement convention itself: axis-aligned segments get
//! the exact matrices callers were built against, vertical segments use
//! the canonical roll, and batch accounting always balances. Changing any
//! expected value here is a breaking change for downstream assets.

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use segment_frame::unit_segment_placement;
use skeleton_from_edges::{
    Edge, Skeleton, StrutTemplate, TemplateLibrary, Wireframe, skeleton_from_edges,
    skeleton_from_wireframe,
};

#[test]
fn horizontal_x_segment_placement_is_scale_and_translate_only() {
    // Both the origin case and an offset case pin the same matrix shape:
    // a (10, 1, 1) scale block and a translation equal to the start.
    for start in [Point3::origin(), Point3::new(2.0, 1.0, 5.0)] {
        let end = start + Vector3::new(10.0, 0.0, 0.0);
        let placement = unit_segment_placement(start, end).unwrap();
        let m = placement.matrix();

        assert_relative_eq!(m[(0, 0)], 10.0, epsilon = 1e-12);
        assert_relative_eq!(m[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[(2, 2)], 1.0, epsilon = 1e-12);
        for (row, col) in [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)] {
            assert_relative_eq!(m[(row, col)], 0.0, epsilon = 1e-12);
        }

        assert_relative_eq!(m[(0, 3)], start.x, epsilon = 1e-12);
        assert_relative_eq!(m[(1, 3)], start.y, epsilon = 1e-12);
        assert_relative_eq!(m[(2, 3)], start.z, epsilon = 1e-12);
    }
}

#[test]
fn vertical_segment_uses_the_canonical_roll() {
    let template = StrutTemplate::new(vec![
        vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
        // Marker strand offset one unit along local +Y.
        vec![Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0)],
    ])
    .unwrap();
    let edges = [Edge::new(Point3::origin(), Point3::new(0.0, 0.0, 5.0))];

    let skeleton = skeleton_from_edges(&edges, &template);

    assert_eq!(skeleton.replaced_edges, 1);
    let spine = &skeleton.strands[0];
    let marker = &skeleton.strands[1];

    assert_relative_eq!(spine[0].coords, Vector3::new(0.0, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(spine[1].coords, Vector3::new(0.0, 0.0, 5.0), epsilon = 1e-12);

    // Local +Y maps to world -X: the fallback roll is +X and the
    // published Y axis is its negation.
    assert_relative_eq!(
        marker[0].coords,
        Vector3::new(-1.0, 0.0, 0.0),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        marker[1].coords,
        Vector3::new(-1.0, 0.0, 5.0),
        epsilon = 1e-12
    );
}

#[test]
fn sloped_segments_keep_the_cross_section_horizontal_and_unscaled() {
    let start = Point3::new(1.0, 2.0, 3.0);
    let end = Point3::new(4.0, -2.0, 9.0);
    let template = StrutTemplate::new(vec![vec![
        Point3::origin(),
        Point3::new(0.0, 1.0, 0.0),
    ]])
    .unwrap();

    let skeleton = skeleton_from_edges(&[Edge::new(start, end)], &template);
    let strand = &skeleton.strands[0];
    let offset = strand[1] - strand[0];

    // The roll locks to the horizontal plane, and Y is never stretched.
    assert_relative_eq!(offset.z, 0.0, epsilon = 1e-9);
    assert_relative_eq!(offset.norm(), 1.0, epsilon = 1e-9);
}

#[test]
fn accounting_balances_for_mixed_wireframes() {
    let p = Point3::new(3.0, 3.0, 3.0);
    let mut wireframe = Wireframe::new();
    wireframe.push(Edge::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0)));
    wireframe.push(Edge::new(p, p));
    wireframe.push(Edge::new(p, Point3::new(3.0, 3.0, 8.0)));
    wireframe.push(Edge::new(p, p));

    let skeleton = skeleton_from_wireframe(&wireframe, &StrutTemplate::unit_segment());

    assert_eq!(skeleton.replaced_edges, 2);
    assert_eq!(skeleton.skipped_edges, 2);
    assert_eq!(
        skeleton.replaced_edges + skeleton.skipped_edges,
        wireframe.edge_count()
    );
    assert_eq!(skeleton.strand_count(), 2);
}

#[test]
fn prefiltering_degenerate_edges_matches_the_skip_path() {
    let p = Point3::new(1.0, 1.0, 1.0);
    let edges = vec![
        Edge::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0)),
        Edge::new(p, p),
        Edge::new(Point3::new(0.0, 4.0, 0.0), Point3::new(0.0, 4.0, 2.0)),
    ];
    let template = StrutTemplate::unit_segment();

    let unfiltered = skeleton_from_edges(&edges, &template);

    let kept: Vec<Edge> = edges
        .iter()
        .copied()
        .filter(|edge| !edge.is_degenerate())
        .collect();
    let filtered = skeleton_from_edges(&kept, &template);

    assert_eq!(filtered.skipped_edges, 0);
    assert_eq!(filtered.strands, unfiltered.strands);
}

#[test]
fn conversions_borrow_templates_from_the_library() {
    let wireframe = Wireframe::from_polyline(&[
        Point3::origin(),
        Point3::new(5.0, 0.0, 0.0),
        Point3::new(5.0, 5.0, 0.0),
    ]);

    let mut library = TemplateLibrary::new();
    let first: Skeleton;
    let second: Skeleton;
    {
        let template = library.get_or_insert_with("strut", StrutTemplate::unit_segment);
        first = skeleton_from_wireframe(&wireframe, template);
    }
    {
        // Second conversion hits the cache.
        let template = library.get_or_insert_with("strut", StrutTemplate::unit_segment);
        second = skeleton_from_wireframe(&wireframe, template);
    }
    assert_eq!(library.template_count(), 1);
    assert_eq!(first, second);

    // Unloading the template does not touch skeletons already produced.
    assert!(library.remove("strut").is_some());
    assert!(library.is_empty());
    assert_eq!(first.strand_count(), 2);
}

#[test]
fn conversion_is_reproducible() {
    let wireframe = Wireframe::from_polyline(&[
        Point3::new(-3.0, 2.0, 1.0),
        Point3::new(0.0, 0.0, 4.0),
        Point3::new(2.0, -1.0, 4.0),
        Point3::new(2.0, -1.0, 9.0),
    ]);
    let template = StrutTemplate::unit_segment();

    let a = skeleton_from_wireframe(&wireframe, &template);
    let b = skeleton_from_wireframe(&wireframe, &template);

    assert_eq!(a, b);
}
