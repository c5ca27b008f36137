//! Input model: tools, tool configuration, and the gesture state machine.
//!
//! `ToolConfig` captures everything that determines how a gesture is
//! interpreted — active tool, stroke style, grid snapping — as an explicit
//! value handed to the engine, never ambient state. `GestureState` is the
//! active gesture being tracked between pointer-down and pointer-up, carrying
//! the context needed to apply incremental mutations and commit or revert on
//! release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{ARROW_POINTS, MIN_PATH_POINTS};
use crate::doc::{Entity, EntityId, EntityKind, Style};
use crate::history::Snapshot;
use crate::pitch::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / drag tool (default); never creates entities.
    #[default]
    Select,
    /// Draw a free-form chalk stroke.
    Freehand,
    /// Place a player token.
    Token,
    /// Draw a multi-point movement path.
    Movement,
    /// Draw a two-point pass arrow.
    Pass,
    /// Draw a two-point shot arrow.
    Shot,
}

impl Tool {
    /// The entity kind this tool creates, if it is a drawing tool.
    #[must_use]
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            Self::Select => None,
            Self::Freehand => Some(EntityKind::FreehandStroke),
            Self::Token => Some(EntityKind::PlayerToken),
            Self::Movement => Some(EntityKind::MovementPath),
            Self::Pass => Some(EntityKind::PassArrow),
            Self::Shot => Some(EntityKind::ShotArrow),
        }
    }

    /// Whether this tool creates entities on pointer-down over empty canvas.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        self.entity_kind().is_some()
    }
}

/// Minimum point count required to commit an in-progress entity of `kind`.
#[must_use]
pub fn min_commit_points(kind: EntityKind) -> usize {
    match kind {
        EntityKind::PlayerToken => 1,
        EntityKind::PassArrow | EntityKind::ShotArrow => ARROW_POINTS,
        EntityKind::FreehandStroke | EntityKind::MovementPath => MIN_PATH_POINTS,
    }
}

/// Explicit configuration handed to the engine; fully determines how pointer
/// input is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    /// Active tool.
    pub tool: Tool,
    /// Style applied to newly drawn entities.
    pub style: Style,
    /// Grid step for snapping during drags; `None` disables snapping.
    pub grid: Option<f64>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self { tool: Tool::default(), style: Style::default(), grid: None }
    }
}

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// An existing entity is being moved across the pitch.
    Dragging {
        /// Id of the entity being dragged.
        id: EntityId,
        /// Offset from the pointer to the entity's first point, captured at
        /// pointer-down so the entity doesn't jump under the cursor.
        grab: Point,
        /// Surface state at gesture start, restored if the gesture cancels.
        before: Snapshot,
    },
    /// A new entity is being drawn; it joins the surface only on commit.
    Drawing {
        /// The in-progress entity accumulating points.
        pending: Entity,
    },
}

impl GestureState {
    /// Whether a gesture is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}
