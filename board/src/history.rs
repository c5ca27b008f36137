//! Snapshot history for linear undo/redo.
//!
//! Each discrete edit stores a full deep copy of the surface. Undo moves a
//! cursor backward over `past`; redo replays from `future`. Recording a new
//! edit clears `future` entirely — once you undo and then edit, the old redo
//! branch is gone. The whole history lives and dies with the editing session.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::doc::Entity;

/// An immutable, fully independent copy of a surface at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    entities: Vec<Entity>,
}

impl Snapshot {
    /// Wrap an owned entity list as a snapshot.
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// An empty-surface snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self { entities: Vec::new() }
    }

    /// The captured entities in z-order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of captured entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the snapshot captured an empty surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Undo (`past`) / redo (`future`) snapshot stacks.
///
/// `past` always holds at least one snapshot: the state the session opened
/// with. The top of `past` is the current state.
#[derive(Debug, Clone)]
pub struct History {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
}

impl History {
    /// Create a history seeded with the session's initial state.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self { past: vec![initial], future: Vec::new() }
    }

    /// Push a completed edit's snapshot and drop any redo branch.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        self.future.clear();
    }

    /// Step backward. Returns the snapshot to restore, or `None` when
    /// already at the initial state.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.past.len() <= 1 {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push(current);
        self.past.last()
    }

    /// Step forward. Returns the snapshot to restore, or `None` when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.future.pop()?;
        self.past.push(next);
        self.past.last()
    }

    /// Whether an undo would change state.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Whether a redo would change state.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots on the undo stack, including the initial state.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.past.len()
    }

    /// Number of snapshots available for redo.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// The snapshot describing the current state (top of `past`).
    ///
    /// # Panics
    ///
    /// Never panics: `past` is non-empty by construction.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        self.past.last().expect("history invariant: past is never empty")
    }
}
