//! The editing engine: owns the surface, the history, and the active
//! gesture, and turns pointer events into committed edits.
//!
//! Pointer handlers return [`Action`]s for the host to process (persist the
//! edit, update the cursor, schedule a repaint). Exactly one history record
//! is committed per discrete gesture; a gesture released outside the pitch
//! bounds is cancelled and leaves no trace.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use uuid::Uuid;

use crate::doc::{Entity, EntityId, EntityKind, Surface, SurfaceError};
use crate::hit::hit_test;
use crate::history::{History, Snapshot};
use crate::input::{GestureState, Tool, ToolConfig, min_commit_points};
use crate::pitch::{Point, apply_grid, clamp_to_pitch, in_bounds};

/// Actions returned from engine handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A new entity was committed to the surface.
    EntityCreated(Entity),
    /// An existing entity's position was committed after a drag.
    EntityMoved { id: EntityId },
    /// An entity was deleted.
    EntityDeleted { id: EntityId },
    /// The surface was emptied by a reset.
    SurfaceCleared,
    /// The active gesture was cancelled and the surface reverted.
    GestureCancelled,
    /// The scene changed; the host should repaint.
    RenderNeeded,
}

/// Core editing state for one session.
pub struct Engine {
    pub surface: Surface,
    pub history: History,
    pub gesture: GestureState,
    pub config: ToolConfig,
    /// Set while a save is in flight; all input is ignored until cleared.
    pub input_locked: bool,
}

impl Engine {
    /// Create an engine over a blank surface.
    #[must_use]
    pub fn new() -> Self {
        Self::from_surface(Surface::new())
    }

    /// Create an engine over a pre-loaded surface (opening a saved board).
    /// The history is seeded with the surface's current state.
    #[must_use]
    pub fn from_surface(surface: Surface) -> Self {
        let history = History::new(surface.snapshot());
        Self {
            surface,
            history,
            gesture: GestureState::Idle,
            config: ToolConfig::default(),
            input_locked: false,
        }
    }

    // --- Configuration ---

    /// Set the active tool, keeping the rest of the configuration.
    pub fn set_tool(&mut self, tool: Tool) {
        self.config.tool = tool;
    }

    /// Replace the whole tool configuration.
    pub fn set_config(&mut self, config: ToolConfig) {
        self.config = config;
    }

    // --- Pointer events ---

    /// Begin a gesture. A press over an existing entity starts a drag; a
    /// press over empty canvas with a drawing tool active starts a new
    /// in-progress entity. Presses outside the pitch are ignored.
    pub fn pointer_down(&mut self, p: Point) -> Vec<Action> {
        if self.input_locked || self.gesture.is_active() || !in_bounds(p) {
            return Vec::new();
        }

        if let Some(id) = hit_test(p, &self.surface) {
            let Some(entity) = self.surface.get(&id) else {
                return Vec::new();
            };
            let origin = entity.points[0];
            self.gesture = GestureState::Dragging {
                id,
                grab: Point::new(p.x - origin.x, p.y - origin.y),
                before: self.surface.snapshot(),
            };
            return vec![Action::RenderNeeded];
        }

        if let Some(kind) = self.config.tool.entity_kind() {
            let start = if kind == EntityKind::PlayerToken {
                apply_grid(p, self.config.grid)
            } else {
                clamp_to_pitch(p)
            };
            self.gesture = GestureState::Drawing {
                pending: Entity {
                    id: Uuid::new_v4(),
                    kind,
                    points: vec![start],
                    style: self.config.style.clone(),
                    label: None,
                },
            };
            return vec![Action::RenderNeeded];
        }

        Vec::new()
    }

    /// Continue the active gesture. Dragging translates every point of the
    /// entity (snapped when a grid is configured); drawing accumulates
    /// points. Every applied coordinate is clamped into the pitch.
    pub fn pointer_move(&mut self, p: Point) -> Vec<Action> {
        if self.input_locked {
            return Vec::new();
        }
        match &mut self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Dragging { id, grab, .. } => {
                let id = *id;
                let origin = apply_grid(Point::new(p.x - grab.x, p.y - grab.y), self.config.grid);
                let Some(entity) = self.surface.get(&id) else {
                    return Vec::new();
                };
                let first = entity.points[0];
                let (dx, dy) = (origin.x - first.x, origin.y - first.y);
                if dx == 0.0 && dy == 0.0 {
                    return Vec::new();
                }
                let moved = entity
                    .points
                    .iter()
                    .map(|pt| clamp_to_pitch(Point::new(pt.x + dx, pt.y + dy)))
                    .collect();
                match self.surface.update_entity_points(&id, moved) {
                    Ok(()) => vec![Action::RenderNeeded],
                    Err(_) => Vec::new(),
                }
            }
            GestureState::Drawing { pending } => {
                let cp = clamp_to_pitch(p);
                match pending.kind {
                    EntityKind::PlayerToken => {
                        pending.points[0] = apply_grid(p, self.config.grid);
                    }
                    EntityKind::PassArrow | EntityKind::ShotArrow => {
                        // Endpoint entities keep a start and a live end.
                        if pending.points.len() < 2 {
                            pending.points.push(cp);
                        } else {
                            pending.points[1] = cp;
                        }
                    }
                    EntityKind::FreehandStroke | EntityKind::MovementPath => {
                        pending.points.push(cp);
                    }
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    /// End the active gesture. A release inside the pitch commits the edit
    /// and records exactly one history entry — including a drag with zero
    /// net movement, which still counts as a discrete edit. A release
    /// outside the pitch cancels the gesture: the surface reverts to its
    /// pre-gesture state and no history entry is recorded. An in-progress
    /// entity below its kind's minimum point count is discarded silently.
    pub fn pointer_up(&mut self, p: Point) -> Vec<Action> {
        if self.input_locked {
            return Vec::new();
        }
        match std::mem::take(&mut self.gesture) {
            GestureState::Idle => Vec::new(),
            GestureState::Dragging { id, before, .. } => {
                if !in_bounds(p) {
                    self.surface.restore(&before);
                    return vec![Action::GestureCancelled, Action::RenderNeeded];
                }
                self.history.record(self.surface.snapshot());
                vec![Action::EntityMoved { id }, Action::RenderNeeded]
            }
            GestureState::Drawing { pending } => {
                if !in_bounds(p) {
                    return vec![Action::GestureCancelled, Action::RenderNeeded];
                }
                if pending.points.len() < min_commit_points(pending.kind) {
                    return vec![Action::RenderNeeded];
                }
                let committed = pending.clone();
                match self.surface.add_entity(pending) {
                    Ok(()) => {
                        self.history.record(self.surface.snapshot());
                        vec![Action::EntityCreated(committed), Action::RenderNeeded]
                    }
                    Err(_) => Vec::new(),
                }
            }
        }
    }

    /// Abort the active gesture (Escape): the surface reverts to its
    /// pre-gesture state and no history entry is recorded.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.gesture) {
            GestureState::Idle => Vec::new(),
            GestureState::Dragging { before, .. } => {
                self.surface.restore(&before);
                vec![Action::GestureCancelled, Action::RenderNeeded]
            }
            GestureState::Drawing { .. } => vec![Action::GestureCancelled, Action::RenderNeeded],
        }
    }

    // --- Programmatic edits (each records one history entry) ---

    /// Place a fully formed entity (formation templates, paste).
    ///
    /// # Errors
    ///
    /// Propagates [`SurfaceError`] from validation or an id collision.
    pub fn insert_entity(&mut self, entity: Entity) -> Result<Vec<Action>, SurfaceError> {
        if self.input_locked || self.gesture.is_active() {
            return Ok(Vec::new());
        }
        let committed = entity.clone();
        self.surface.add_entity(entity)?;
        self.history.record(self.surface.snapshot());
        Ok(vec![Action::EntityCreated(committed), Action::RenderNeeded])
    }

    /// Delete one entity. Deleting an absent id is a no-op and records
    /// nothing.
    pub fn delete_entity(&mut self, id: &EntityId) -> Vec<Action> {
        if self.input_locked || self.gesture.is_active() {
            return Vec::new();
        }
        if self.surface.remove_entity(id).is_none() {
            return Vec::new();
        }
        self.history.record(self.surface.snapshot());
        vec![Action::EntityDeleted { id: *id }, Action::RenderNeeded]
    }

    /// Empty the surface (reset). A reset of an already-empty surface
    /// records nothing.
    pub fn clear(&mut self) -> Vec<Action> {
        if self.input_locked || self.gesture.is_active() || self.surface.is_empty() {
            return Vec::new();
        }
        self.surface.clear();
        self.history.record(self.surface.snapshot());
        vec![Action::SurfaceCleared, Action::RenderNeeded]
    }

    // --- History ---

    /// Step backward one edit, restoring the previous snapshot.
    pub fn undo(&mut self) -> Vec<Action> {
        if self.input_locked || self.gesture.is_active() {
            return Vec::new();
        }
        let Some(snapshot) = self.history.undo() else {
            return Vec::new();
        };
        self.surface.restore(snapshot);
        vec![Action::RenderNeeded]
    }

    /// Step forward one edit, restoring the undone snapshot.
    pub fn redo(&mut self) -> Vec<Action> {
        if self.input_locked || self.gesture.is_active() {
            return Vec::new();
        }
        let Some(snapshot) = self.history.redo() else {
            return Vec::new();
        };
        self.surface.restore(snapshot);
        vec![Action::RenderNeeded]
    }

    // --- Save flow ---

    /// Lock input for the duration of a save and return the snapshot to
    /// export. Returns `None` if a save is already in flight or a gesture
    /// is active.
    pub fn begin_save(&mut self) -> Option<Snapshot> {
        if self.input_locked || self.gesture.is_active() {
            return None;
        }
        self.input_locked = true;
        Some(self.surface.snapshot())
    }

    /// Unlock input after a save completes. Called on success and on
    /// failure alike: a failed upload preserves local state for retry.
    pub fn finish_save(&mut self) {
        self.input_locked = false;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
