//! Document model: placed entities, their validation rules, and the surface
//! store that owns them for the duration of an editing session.
//!
//! This module defines the drawable entity types (`Entity`, `EntityKind`,
//! `Style`) and the runtime store (`Surface`). Data flows into this layer
//! from saved documents (JSON deserialization) and from the input engine
//! (mutations). Rendering layers observe the surface through the `watch`
//! subscription rather than polling; z-order is insertion order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_STROKE, DEFAULT_STROKE_WIDTH};
use crate::history::Snapshot;
use crate::pitch::Point;

/// Unique identifier for a placed entity.
pub type EntityId = Uuid;

/// The kind of a placed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// Free-form chalk stroke; many points in draw order.
    FreehandStroke,
    /// A player marker; exactly one point (its center).
    PlayerToken,
    /// Dribble/run path; two or more points.
    MovementPath,
    /// Pass annotation; exactly two points (start, end).
    PassArrow,
    /// Shot annotation; exactly two points (start, end).
    ShotArrow,
}

impl EntityKind {
    /// Whether this kind is a two-point arrow annotation.
    #[must_use]
    pub fn is_arrow(self) -> bool {
        matches!(self, Self::PassArrow | Self::ShotArrow)
    }

    /// Human-readable arity requirement, used in validation errors.
    #[must_use]
    pub fn arity(self) -> &'static str {
        match self {
            Self::PlayerToken => "exactly 1 point",
            Self::PassArrow | Self::ShotArrow => "exactly 2 points",
            Self::MovementPath => "at least 2 points",
            Self::FreehandStroke => "at least 1 point",
        }
    }
}

/// Stroke styling for a placed entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stroke color as a CSS color string.
    pub stroke: String,
    /// Stroke width in pitch units.
    pub width: f64,
    /// Dash pattern (on/off run lengths); solid when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f64>>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: DEFAULT_STROKE.to_owned(),
            width: DEFAULT_STROKE_WIDTH,
            dash: None,
        }
    }
}

/// A placed entity as stored in the document and in export payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, stable for the entity's lifetime.
    pub id: EntityId,
    /// What the entity represents.
    pub kind: EntityKind,
    /// Ordered coordinates in pitch space; semantics depend on `kind`.
    pub points: Vec<Point>,
    /// Stroke styling.
    pub style: Style,
    /// Shirt number or name shown on a player token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Entity {
    /// Check the point-count invariant for this entity's kind.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Validation`] when `points` violates the arity
    /// rule: one point for a token, two for an arrow, two or more for a
    /// movement path, one or more for a freehand stroke.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        let n = self.points.len();
        let ok = match self.kind {
            EntityKind::PlayerToken => n == 1,
            EntityKind::PassArrow | EntityKind::ShotArrow => n == 2,
            EntityKind::MovementPath => n >= 2,
            EntityKind::FreehandStroke => n >= 1,
        };
        if ok {
            Ok(())
        } else {
            Err(SurfaceError::Validation { kind: self.kind, actual: n })
        }
    }
}

/// Errors raised by surface operations.
///
/// These are programming invariants: in correct engine usage they do not
/// occur, and none of them is part of the user-visible failure surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// An entity's point count violates its kind's arity rule.
    #[error("{kind:?} entity has {actual} points; requires {}", .kind.arity())]
    Validation { kind: EntityKind, actual: usize },
    /// An entity with the same id is already on the surface.
    #[error("entity {0} already on the surface")]
    Duplicate(EntityId),
    /// The operation referenced an id not present on the surface.
    #[error("no entity with id {0}")]
    NotFound(EntityId),
}

/// A mutation notification delivered to surface watchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceChange {
    /// An entity was appended.
    Added(EntityId),
    /// An entity's points were replaced.
    PointsUpdated(EntityId),
    /// An entity was removed.
    Removed(EntityId),
    /// All entities were removed.
    Cleared,
    /// The whole surface was replaced from a snapshot.
    Restored,
}

/// Handle returned by [`Surface::watch`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatcherId(u64);

type Watcher = Box<dyn FnMut(&SurfaceChange)>;

/// The live, mutable entity collection for one editing session.
///
/// Iteration order is insertion order, which is also render z-order.
pub struct Surface {
    entities: Vec<Entity>,
    watchers: Vec<(WatcherId, Watcher)>,
    next_watcher: u64,
}

impl Surface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self { entities: Vec::new(), watchers: Vec::new(), next_watcher: 0 }
    }

    /// Build a surface from a saved entity list, validating every entity and
    /// rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns the first [`SurfaceError::Validation`] or
    /// [`SurfaceError::Duplicate`] encountered.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self, SurfaceError> {
        let mut surface = Self::new();
        for entity in entities {
            surface.add_entity(entity)?;
        }
        Ok(surface)
    }

    /// Append a fully formed entity.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::Validation`] if the kind's arity invariant is
    /// violated, [`SurfaceError::Duplicate`] if the id already exists.
    pub fn add_entity(&mut self, entity: Entity) -> Result<(), SurfaceError> {
        entity.validate()?;
        if self.position(&entity.id).is_some() {
            return Err(SurfaceError::Duplicate(entity.id));
        }
        let id = entity.id;
        self.entities.push(entity);
        self.notify(&SurfaceChange::Added(id));
        Ok(())
    }

    /// Replace an existing entity's points, re-validating arity.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::NotFound`] if `id` is absent,
    /// [`SurfaceError::Validation`] if `new_points` violates the arity rule.
    pub fn update_entity_points(&mut self, id: &EntityId, new_points: Vec<Point>) -> Result<(), SurfaceError> {
        let Some(idx) = self.position(id) else {
            return Err(SurfaceError::NotFound(*id));
        };
        let candidate = Entity { points: new_points, ..self.entities[idx].clone() };
        candidate.validate()?;
        self.entities[idx] = candidate;
        self.notify(&SurfaceChange::PointsUpdated(*id));
        Ok(())
    }

    /// Remove an entity by id, returning it if it was present. Removing an
    /// absent id is a no-op.
    pub fn remove_entity(&mut self, id: &EntityId) -> Option<Entity> {
        let idx = self.position(id)?;
        let removed = self.entities.remove(idx);
        self.notify(&SurfaceChange::Removed(*id));
        Some(removed)
    }

    /// Empty the surface.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.notify(&SurfaceChange::Cleared);
    }

    /// Deep, independent copy of the current state for history storage.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.entities.clone())
    }

    /// Replace the entire live state with a snapshot's contents.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.entities = snapshot.entities().to_vec();
        self.notify(&SurfaceChange::Restored);
    }

    /// Return a reference to an entity by id.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.position(id).map(|idx| &self.entities[idx])
    }

    /// Iterate entities in z-order (insertion order).
    pub fn entities(&self) -> impl DoubleEndedIterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of entities currently on the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the surface contains no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Subscribe to mutation notifications. The callback fires after each
    /// mutation has been applied.
    pub fn watch(&mut self, callback: impl FnMut(&SurfaceChange) + 'static) -> WatcherId {
        let id = WatcherId(self.next_watcher);
        self.next_watcher += 1;
        self.watchers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unwatch(&mut self, id: WatcherId) {
        self.watchers.retain(|(watcher_id, _)| *watcher_id != id);
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == *id)
    }

    fn notify(&mut self, change: &SurfaceChange) {
        for (_, callback) in &mut self.watchers {
            callback(change);
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
