#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::*;
use crate::store::{Geometry, Shape};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn rect_shape(x: f64, y: f64, w: f64, h: f64, rotation: f64) -> Shape {
    Shape {
        id: 1,
        geometry: Geometry::Rect,
        bbox: BoundingBox::new(x, y, w, h),
        rotation,
        label: None,
        text_only: false,
        visible: true,
    }
}

fn polygon_shape(points: Vec<Point>) -> Shape {
    let bbox = BoundingBox::of_points(&points);
    Shape {
        id: 2,
        geometry: Geometry::Polygon { points },
        bbox,
        rotation: 0.0,
        label: None,
        text_only: false,
        visible: true,
    }
}

fn handle_at(shape: &Shape, handle: Handle, zoom: f64) -> Point {
    handle_position(shape, handle, zoom)
}

// =============================================================
// BoundingBox
// =============================================================

#[test]
fn bbox_of_points_spans_min_max() {
    let points = vec![Point::new(3.0, 7.0), Point::new(-1.0, 2.0), Point::new(5.0, 4.0)];
    let bbox = BoundingBox::of_points(&points);
    assert_eq!(bbox, BoundingBox::new(-1.0, 2.0, 6.0, 5.0));
}

#[test]
fn bbox_of_points_empty_is_zero() {
    assert_eq!(BoundingBox::of_points(&[]), BoundingBox::default());
}

#[test]
fn bbox_of_points_single_point_is_degenerate() {
    let bbox = BoundingBox::of_points(&[Point::new(4.0, 9.0)]);
    assert_eq!(bbox, BoundingBox::new(4.0, 9.0, 0.0, 0.0));
}

#[test]
fn bbox_from_corners_any_order() {
    let a = BoundingBox::from_corners(Point::new(10.0, 20.0), Point::new(4.0, 2.0));
    let b = BoundingBox::from_corners(Point::new(4.0, 2.0), Point::new(10.0, 20.0));
    assert_eq!(a, b);
    assert_eq!(a, BoundingBox::new(4.0, 2.0, 6.0, 18.0));
}

#[test]
fn bbox_center() {
    let bbox = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
    assert!(point_approx_eq(bbox.center(), Point::new(25.0, 40.0)));
}

#[test]
fn bbox_normalized_folds_negative_extents() {
    let bbox = BoundingBox::new(10.0, 10.0, -4.0, -6.0).normalized();
    assert_eq!(bbox, BoundingBox::new(6.0, 4.0, 4.0, 6.0));
}

#[test]
fn bbox_normalized_keeps_positive_extents() {
    let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bbox.normalized(), bbox);
}

#[test]
fn bbox_translated() {
    let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0).translated(10.0, -2.0);
    assert_eq!(bbox, BoundingBox::new(11.0, 0.0, 3.0, 4.0));
}

// =============================================================
// rotate_about
// =============================================================

#[test]
fn rotate_about_identity_at_zero_angle() {
    let p = rotate_about(Point::new(3.0, 4.0), Point::new(1.0, 1.0), 0.0);
    assert!(point_approx_eq(p, Point::new(3.0, 4.0)));
}

#[test]
fn rotate_about_quarter_turn() {
    // (1, 0) about the origin by 90 degrees lands on (0, 1) (y-down world,
    // positive angle is clockwise on screen).
    let p = rotate_about(Point::new(1.0, 0.0), Point::new(0.0, 0.0), FRAC_PI_2);
    assert!(point_approx_eq(p, Point::new(0.0, 1.0)));
}

#[test]
fn rotate_about_keeps_center_fixed() {
    let c = Point::new(5.0, -3.0);
    let p = rotate_about(c, c, 1.2345);
    assert!(point_approx_eq(p, c));
}

#[test]
fn rotate_about_inverse_restores_point() {
    let c = Point::new(10.0, 20.0);
    let p = Point::new(-4.0, 7.5);
    let back = rotate_about(rotate_about(p, c, 0.7), c, -0.7);
    assert!(point_approx_eq(back, p));
}

// =============================================================
// point_in_shape: rectangles
// =============================================================

#[test]
fn rect_contains_center() {
    let shape = rect_shape(10.0, 20.0, 30.0, 40.0, 0.0);
    assert!(point_in_shape(Point::new(25.0, 40.0), &shape));
}

#[test]
fn rect_excludes_outside_point() {
    let shape = rect_shape(10.0, 20.0, 30.0, 40.0, 0.0);
    assert!(!point_in_shape(Point::new(50.0, 40.0), &shape));
}

#[test]
fn rect_boundary_is_outside() {
    // Strict inequality: edge and corner points do not count as inside.
    let shape = rect_shape(0.0, 0.0, 10.0, 10.0, 0.0);
    assert!(!point_in_shape(Point::new(0.0, 5.0), &shape));
    assert!(!point_in_shape(Point::new(10.0, 10.0), &shape));
    assert!(!point_in_shape(Point::new(5.0, 0.0), &shape));
}

#[test]
fn rect_corner_handles_never_inside_body() {
    let shape = rect_shape(10.0, 20.0, 30.0, 40.0, 0.6);
    for handle in [Handle::Nw, Handle::Ne, Handle::Sw, Handle::Se] {
        let pos = handle_at(&shape, handle, 1.0);
        assert!(!point_in_shape(pos, &shape), "{handle:?} reported inside");
    }
}

#[test]
fn rotated_rect_contains_point_in_rotated_frame() {
    // 20x10 box centered at the origin, rotated 90 degrees: the point
    // (0, 8) is inside only because of the rotation.
    let shape = rect_shape(-10.0, -5.0, 20.0, 10.0, FRAC_PI_2);
    assert!(point_in_shape(Point::new(0.0, 8.0), &shape));
    assert!(!point_in_shape(Point::new(8.0, 0.0), &shape));
}

#[test]
fn rect_with_negative_extent_still_contains() {
    let shape = rect_shape(10.0, 10.0, -10.0, -10.0, 0.0);
    assert!(point_in_shape(Point::new(5.0, 5.0), &shape));
}

// =============================================================
// point_in_shape: polygons
// =============================================================

fn triangle() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)]
}

#[test]
fn polygon_contains_interior_point() {
    let shape = polygon_shape(triangle());
    assert!(point_in_shape(Point::new(5.0, 3.0), &shape));
}

#[test]
fn polygon_excludes_exterior_point() {
    let shape = polygon_shape(triangle());
    assert!(!point_in_shape(Point::new(0.5, 9.0), &shape));
    assert!(!point_in_shape(Point::new(-1.0, 0.5), &shape));
}

#[test]
fn polygon_wraparound_edge_counts() {
    // The closing edge from (5,10) back to (0,0) must participate, or
    // points left of it leak inside.
    let shape = polygon_shape(triangle());
    assert!(!point_in_shape(Point::new(1.0, 8.0), &shape));
    assert!(point_in_shape(Point::new(4.5, 8.0), &shape));
}

#[test]
fn polygon_concave_even_odd() {
    // A "C" shape: the notch is outside by the even-odd rule.
    let c = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 3.0),
        Point::new(3.0, 3.0),
        Point::new(3.0, 7.0),
        Point::new(10.0, 7.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let shape = polygon_shape(c);
    assert!(point_in_shape(Point::new(1.5, 5.0), &shape));
    assert!(!point_in_shape(Point::new(6.0, 5.0), &shape));
}

#[test]
fn degenerate_polygon_contains_nothing() {
    let shape = polygon_shape(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    assert!(!point_in_shape(Point::new(5.0, 0.0), &shape));
}

// =============================================================
// point_in_circle
// =============================================================

#[test]
fn circle_contains_center() {
    assert!(point_in_circle(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 0.0));
}

#[test]
fn circle_boundary_is_inside() {
    // Inclusive, unlike shape bodies.
    assert!(point_in_circle(Point::new(8.0, 5.0), Point::new(5.0, 5.0), 3.0));
}

#[test]
fn circle_excludes_beyond_radius() {
    assert!(!point_in_circle(Point::new(8.1, 5.0), Point::new(5.0, 5.0), 3.0));
}

// =============================================================
// Handles
// =============================================================

#[test]
fn handle_positions_unrotated_box() {
    let shape = rect_shape(0.0, 0.0, 100.0, 80.0, 0.0);
    assert!(point_approx_eq(handle_at(&shape, Handle::Nw, 1.0), Point::new(0.0, 0.0)));
    assert!(point_approx_eq(handle_at(&shape, Handle::Se, 1.0), Point::new(100.0, 80.0)));
    assert!(point_approx_eq(handle_at(&shape, Handle::N, 1.0), Point::new(50.0, 0.0)));
    assert!(point_approx_eq(handle_at(&shape, Handle::E, 1.0), Point::new(100.0, 40.0)));
}

#[test]
fn rotate_handle_sits_above_n_handle() {
    let shape = rect_shape(0.0, 0.0, 100.0, 80.0, 0.0);
    let n = handle_at(&shape, Handle::N, 1.0);
    let rotate = handle_at(&shape, Handle::Rotate, 1.0);
    assert!(approx_eq(rotate.x, n.x));
    assert!(approx_eq(n.y - rotate.y, crate::consts::ROTATE_HANDLE_OFFSET_PX));
}

#[test]
fn rotate_handle_offset_shrinks_with_zoom() {
    // The offset is screen-constant, so world distance halves at zoom 2.
    let shape = rect_shape(0.0, 0.0, 100.0, 80.0, 0.0);
    let n = handle_at(&shape, Handle::N, 2.0);
    let rotate = handle_at(&shape, Handle::Rotate, 2.0);
    assert!(approx_eq(n.y - rotate.y, crate::consts::ROTATE_HANDLE_OFFSET_PX / 2.0));
}

#[test]
fn handles_rotate_with_shape() {
    // Quarter turn: the N handle moves to where E was.
    let shape = rect_shape(-50.0, -40.0, 100.0, 80.0, 0.0);
    let rotated = rect_shape(-50.0, -40.0, 100.0, 80.0, FRAC_PI_2);
    let n_rotated = handle_at(&rotated, Handle::N, 1.0);
    assert!(point_approx_eq(n_rotated, Point::new(40.0, 0.0)));
    let n_flat = handle_at(&shape, Handle::N, 1.0);
    assert!(point_approx_eq(n_flat, Point::new(0.0, -40.0)));
}

#[test]
fn handle_positions_returns_all_nine() {
    let shape = rect_shape(0.0, 0.0, 10.0, 10.0, 0.3);
    let positions = handle_positions(&shape, 1.0);
    assert_eq!(positions.len(), 9);
    let rotate_count = positions.iter().filter(|(h, _)| *h == Handle::Rotate).count();
    assert_eq!(rotate_count, 1);
}

#[test]
fn handle_opposites_pair_up() {
    for handle in Handle::RESIZE {
        assert_eq!(handle.opposite().opposite(), handle);
        assert_ne!(handle.opposite(), handle);
    }
    assert_eq!(Handle::Rotate.opposite(), Handle::Rotate);
}

#[test]
fn opposite_handles_mirror_through_center() {
    let shape = rect_shape(10.0, 20.0, 30.0, 40.0, 0.8);
    let center = shape.center();
    for handle in Handle::RESIZE {
        let a = handle_at(&shape, handle, 1.0);
        let b = handle_at(&shape, handle.opposite(), 1.0);
        assert!(approx_eq((a.x + b.x) / 2.0, center.x));
        assert!(approx_eq((a.y + b.y) / 2.0, center.y));
    }
}

// =============================================================
// Resize cursors
// =============================================================

#[test]
fn cursor_unrotated_compass() {
    assert_eq!(resize_cursor(Handle::N, 0.0), CursorClass::Ns);
    assert_eq!(resize_cursor(Handle::S, 0.0), CursorClass::Ns);
    assert_eq!(resize_cursor(Handle::E, 0.0), CursorClass::Ew);
    assert_eq!(resize_cursor(Handle::W, 0.0), CursorClass::Ew);
    assert_eq!(resize_cursor(Handle::Ne, 0.0), CursorClass::Nesw);
    assert_eq!(resize_cursor(Handle::Sw, 0.0), CursorClass::Nesw);
    assert_eq!(resize_cursor(Handle::Nw, 0.0), CursorClass::Nwse);
    assert_eq!(resize_cursor(Handle::Se, 0.0), CursorClass::Nwse);
}

#[test]
fn cursor_quarter_turn_shifts_two_sectors() {
    // Rotate the shape 90 degrees: N behaves like E.
    assert_eq!(resize_cursor(Handle::N, FRAC_PI_2), CursorClass::Ew);
    assert_eq!(resize_cursor(Handle::E, FRAC_PI_2), CursorClass::Ns);
    assert_eq!(resize_cursor(Handle::Ne, FRAC_PI_2), CursorClass::Nwse);
}

#[test]
fn cursor_eighth_turn_shifts_one_sector() {
    assert_eq!(resize_cursor(Handle::N, FRAC_PI_4), CursorClass::Nesw);
    assert_eq!(resize_cursor(Handle::Se, FRAC_PI_4), CursorClass::Ns);
}

#[test]
fn cursor_full_turn_is_identity() {
    for handle in Handle::RESIZE {
        assert_eq!(resize_cursor(handle, 2.0 * PI), resize_cursor(handle, 0.0));
    }
}

#[test]
fn cursor_negative_rotation_wraps() {
    assert_eq!(resize_cursor(Handle::N, -FRAC_PI_2), CursorClass::Ew);
}

#[test]
fn cursor_sector_boundaries_are_stable() {
    // Just inside each side of the 22.5-degree sector edge around N.
    assert_eq!(resize_cursor(Handle::N, (22.4_f64).to_radians()), CursorClass::Ns);
    assert_eq!(resize_cursor(Handle::N, (22.6_f64).to_radians()), CursorClass::Nesw);
}

#[test]
fn cursor_css_keywords() {
    assert_eq!(CursorClass::Ns.css(), "ns-resize");
    assert_eq!(CursorClass::Nesw.css(), "nesw-resize");
    assert_eq!(CursorClass::Ew.css(), "ew-resize");
    assert_eq!(CursorClass::Nwse.css(), "nwse-resize");
}
