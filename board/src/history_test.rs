#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::doc::{EntityKind, Style};
use crate::pitch::Point;

fn token_at(x: f64, y: f64) -> Entity {
    Entity {
        id: Uuid::new_v4(),
        kind: EntityKind::PlayerToken,
        points: vec![Point::new(x, y)],
        style: Style::default(),
        label: None,
    }
}

fn snap_with(entities: Vec<Entity>) -> Snapshot {
    Snapshot::new(entities)
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_empty_has_no_entities() {
    let snap = Snapshot::empty();
    assert!(snap.is_empty());
    assert_eq!(snap.len(), 0);
    assert!(snap.entities().is_empty());
}

#[test]
fn snapshot_preserves_order() {
    let a = token_at(1.0, 1.0);
    let b = token_at(2.0, 2.0);
    let (id_a, id_b) = (a.id, b.id);
    let snap = snap_with(vec![a, b]);
    assert_eq!(snap.len(), 2);
    assert_eq!(snap.entities()[0].id, id_a);
    assert_eq!(snap.entities()[1].id, id_b);
}

#[test]
fn snapshot_clone_is_independent() {
    let snap = snap_with(vec![token_at(5.0, 5.0)]);
    let copy = snap.clone();
    assert_eq!(snap, copy);
}

// =============================================================
// History: construction
// =============================================================

#[test]
fn new_history_has_initial_state_only() {
    let history = History::new(Snapshot::empty());
    assert_eq!(history.depth(), 1);
    assert_eq!(history.redo_depth(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn current_is_initial_snapshot() {
    let initial = snap_with(vec![token_at(3.0, 3.0)]);
    let history = History::new(initial.clone());
    assert_eq!(*history.current(), initial);
}

// =============================================================
// History: record
// =============================================================

#[test]
fn record_appends_to_past() {
    let mut history = History::new(Snapshot::empty());
    history.record(snap_with(vec![token_at(1.0, 1.0)]));
    assert_eq!(history.depth(), 2);
    assert!(history.can_undo());
}

#[test]
fn record_clears_future() {
    let mut history = History::new(Snapshot::empty());
    history.record(snap_with(vec![token_at(1.0, 1.0)]));
    history.undo();
    assert!(history.can_redo());

    history.record(snap_with(vec![token_at(9.0, 9.0)]));
    assert!(!history.can_redo());
    assert!(history.redo().is_none());
}

// =============================================================
// History: undo
// =============================================================

#[test]
fn undo_at_initial_state_is_noop() {
    let mut history = History::new(Snapshot::empty());
    assert!(history.undo().is_none());
    assert_eq!(history.depth(), 1);
}

#[test]
fn undo_returns_previous_snapshot() {
    let first = snap_with(vec![token_at(1.0, 1.0)]);
    let mut history = History::new(Snapshot::empty());
    history.record(first.clone());
    history.record(snap_with(vec![token_at(2.0, 2.0)]));

    let restored = history.undo().unwrap();
    assert_eq!(*restored, first);
    assert_eq!(history.depth(), 2);
    assert_eq!(history.redo_depth(), 1);
}

#[test]
fn undo_to_initial_state() {
    let mut history = History::new(Snapshot::empty());
    history.record(snap_with(vec![token_at(1.0, 1.0)]));

    let restored = history.undo().unwrap();
    assert!(restored.is_empty());
    assert!(!history.can_undo());
}

// =============================================================
// History: redo
// =============================================================

#[test]
fn redo_with_empty_future_is_noop() {
    let mut history = History::new(Snapshot::empty());
    history.record(snap_with(vec![token_at(1.0, 1.0)]));
    assert!(history.redo().is_none());
}

#[test]
fn undo_then_redo_round_trips() {
    let top = snap_with(vec![token_at(7.0, 7.0)]);
    let mut history = History::new(Snapshot::empty());
    history.record(snap_with(vec![token_at(1.0, 1.0)]));
    history.record(top.clone());

    history.undo();
    let restored = history.redo().unwrap();
    assert_eq!(*restored, top);
    assert_eq!(history.depth(), 3);
    assert_eq!(history.redo_depth(), 0);
}

// =============================================================
// History: multi-step walk
// =============================================================

#[test]
fn walk_back_and_forward_through_three_states() {
    let snap1 = snap_with(vec![token_at(50.0, 50.0)]);
    let snap2 = snap_with(vec![token_at(70.0, 70.0)]);
    let mut history = History::new(Snapshot::empty());
    history.record(snap1.clone());
    history.record(snap2.clone());

    assert_eq!(*history.undo().unwrap(), snap1);
    assert_eq!(history.redo_depth(), 1);

    let back_to_start = history.undo().unwrap();
    assert!(back_to_start.is_empty());
    assert_eq!(history.redo_depth(), 2);

    assert_eq!(*history.redo().unwrap(), snap1);
    assert_eq!(*history.redo().unwrap(), snap2);
    assert!(!history.can_redo());
}
