//! Normalized pitch coordinates: clamping and grid snapping.
//!
//! All entity coordinates live in the `[0,100] × [0,100]` pitch space,
//! independent of any screen resolution. Snapping rounds to the nearest grid
//! line first and clamps second, so a snapped coordinate can never leave the
//! pitch.

#[cfg(test)]
#[path = "pitch_test.rs"]
mod pitch_test;

use serde::{Deserialize, Serialize};

use crate::consts::{PITCH_MAX, PITCH_MIN};

/// A point in normalized pitch space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clamp both axes of a point into the pitch bounds.
#[must_use]
pub fn clamp_to_pitch(p: Point) -> Point {
    Point {
        x: p.x.clamp(PITCH_MIN, PITCH_MAX),
        y: p.y.clamp(PITCH_MIN, PITCH_MAX),
    }
}

/// Whether a point lies inside the pitch bounds (inclusive).
#[must_use]
pub fn in_bounds(p: Point) -> bool {
    (PITCH_MIN..=PITCH_MAX).contains(&p.x) && (PITCH_MIN..=PITCH_MAX).contains(&p.y)
}

/// Round each axis to the nearest multiple of `step`.
///
/// A non-positive `step` leaves the point unchanged.
#[must_use]
pub fn snap_to_grid(p: Point, step: f64) -> Point {
    if step <= 0.0 {
        return p;
    }
    Point {
        x: (p.x / step).round() * step,
        y: (p.y / step).round() * step,
    }
}

/// Apply optional grid snapping, then clamp into the pitch.
///
/// Snap-then-clamp ordering: a point at x=99 with step 10 snaps to the
/// boundary grid line at 100 and stays there after the clamp.
#[must_use]
pub fn apply_grid(p: Point, grid: Option<f64>) -> Point {
    let snapped = match grid {
        Some(step) => snap_to_grid(p, step),
        None => p,
    };
    clamp_to_pitch(snapped)
}
