//! Hit-testing pointer positions against placed entities.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{SEGMENT_HIT_SLOP, TOKEN_HIT_RADIUS};
use crate::doc::{Entity, EntityId, EntityKind, Surface};
use crate::pitch::Point;

/// Test which entity (if any) is under `p`, topmost (most recently placed)
/// first.
#[must_use]
pub fn hit_test(p: Point, surface: &Surface) -> Option<EntityId> {
    surface
        .entities()
        .rev()
        .find(|entity| hits_entity(p, entity))
        .map(|entity| entity.id)
}

fn hits_entity(p: Point, entity: &Entity) -> bool {
    match entity.kind {
        EntityKind::PlayerToken => entity
            .points
            .first()
            .is_some_and(|center| distance(p, *center) <= TOKEN_HIT_RADIUS),
        EntityKind::FreehandStroke
        | EntityKind::MovementPath
        | EntityKind::PassArrow
        | EntityKind::ShotArrow => {
            let slop = entity.style.width / 2.0 + SEGMENT_HIT_SLOP;
            hits_polyline(p, &entity.points, slop)
        }
    }
}

fn hits_polyline(p: Point, points: &[Point], slop: f64) -> bool {
    if points.len() == 1 {
        return distance(p, points[0]) <= slop;
    }
    points
        .windows(2)
        .any(|seg| point_segment_distance(p, seg[0], seg[1]) <= slop)
}

fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Shortest distance from `p` to the segment `a`..`b`.
fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}
