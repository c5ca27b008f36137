#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = pt(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_clone_and_copy() {
    let p = pt(1.0, 2.0);
    let q = p;
    let r = p.clone();
    assert_eq!(p, q);
    assert_eq!(p, r);
}

#[test]
fn point_serde_roundtrip() {
    let p = pt(12.5, 87.25);
    let json = serde_json::to_string(&p).unwrap();
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

// =============================================================
// clamp_to_pitch
// =============================================================

#[test]
fn clamp_inside_is_identity() {
    assert_eq!(clamp_to_pitch(pt(50.0, 60.0)), pt(50.0, 60.0));
}

#[test]
fn clamp_pulls_in_both_axes() {
    assert_eq!(clamp_to_pitch(pt(150.0, -20.0)), pt(100.0, 0.0));
}

#[test]
fn clamp_boundary_is_identity() {
    assert_eq!(clamp_to_pitch(pt(0.0, 100.0)), pt(0.0, 100.0));
}

// =============================================================
// in_bounds
// =============================================================

#[test]
fn in_bounds_interior() {
    assert!(in_bounds(pt(50.0, 50.0)));
}

#[test]
fn in_bounds_edges_inclusive() {
    assert!(in_bounds(pt(0.0, 0.0)));
    assert!(in_bounds(pt(100.0, 100.0)));
    assert!(in_bounds(pt(0.0, 100.0)));
}

#[test]
fn in_bounds_rejects_outside() {
    assert!(!in_bounds(pt(100.1, 50.0)));
    assert!(!in_bounds(pt(50.0, -0.1)));
    assert!(!in_bounds(pt(150.0, 150.0)));
}

// =============================================================
// snap_to_grid
// =============================================================

#[test]
fn snap_rounds_to_nearest_line() {
    assert_eq!(snap_to_grid(pt(12.0, 18.0), 5.0), pt(10.0, 20.0));
}

#[test]
fn snap_exact_multiple_unchanged() {
    assert_eq!(snap_to_grid(pt(25.0, 75.0), 5.0), pt(25.0, 75.0));
}

#[test]
fn snap_half_step_rounds_away_from_zero() {
    // f64::round ties away from zero: 12.5 with step 5 goes to 15.
    assert_eq!(snap_to_grid(pt(12.5, 0.0), 5.0), pt(15.0, 0.0));
}

#[test]
fn snap_zero_step_is_identity() {
    assert_eq!(snap_to_grid(pt(13.0, 14.0), 0.0), pt(13.0, 14.0));
}

#[test]
fn snap_negative_step_is_identity() {
    assert_eq!(snap_to_grid(pt(13.0, 14.0), -5.0), pt(13.0, 14.0));
}

// =============================================================
// apply_grid — snap first, then clamp
// =============================================================

#[test]
fn apply_grid_none_only_clamps() {
    assert_eq!(apply_grid(pt(150.0, -20.0), None), pt(100.0, 0.0));
    assert_eq!(apply_grid(pt(42.0, 42.0), None), pt(42.0, 42.0));
}

#[test]
fn apply_grid_snaps_onto_boundary_line() {
    // 99 with step 10 snaps to the grid line at 100; the clamp keeps it.
    assert_eq!(apply_grid(pt(99.0, 50.0), Some(10.0)), pt(100.0, 50.0));
}

#[test]
fn apply_grid_clamps_after_snap() {
    // 150 with step 40 snaps to 160 first, then clamps to 100.
    assert_eq!(apply_grid(pt(150.0, 50.0), Some(40.0)), pt(100.0, 50.0));
}

#[test]
fn apply_grid_snaps_interior_points() {
    assert_eq!(apply_grid(pt(52.0, 53.0), Some(10.0)), pt(50.0, 50.0));
}
