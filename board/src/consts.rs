//! Shared numeric constants for the board crate.

// ── Pitch space ─────────────────────────────────────────────────

/// Lower bound of the normalized pitch coordinate space, both axes.
pub const PITCH_MIN: f64 = 0.0;

/// Upper bound of the normalized pitch coordinate space, both axes.
pub const PITCH_MAX: f64 = 100.0;

/// Grid step used when snapping is enabled and no step is configured.
pub const DEFAULT_GRID_STEP: f64 = 5.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit radius around a player token's center, in pitch units.
pub const TOKEN_HIT_RADIUS: f64 = 2.5;

/// Extra slop added to half the stroke width when hit-testing line segments.
pub const SEGMENT_HIT_SLOP: f64 = 1.0;

// ── Gesture commit thresholds ───────────────────────────────────

/// Minimum point count to commit a freehand stroke or movement path.
pub const MIN_PATH_POINTS: usize = 2;

/// Point count required of a committed pass or shot arrow.
pub const ARROW_POINTS: usize = 2;

// ── Style defaults ──────────────────────────────────────────────

/// Default stroke color for new entities (chalk white on the pitch).
pub const DEFAULT_STROKE: &str = "#F5F0E8";

/// Default stroke width in pitch units.
pub const DEFAULT_STROKE_WIDTH: f64 = 0.8;
