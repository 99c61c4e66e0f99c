//! Multi-touch geometry.
//!
//! Every function here is total: degenerate input (too few touches, zero elapsed
//! time, coincident fingers) resolves to a neutral value so a stream of hardware
//! samples is never interrupted.

use std::f64::consts::PI;

use crate::foundation::{
    core::{Direction, Point, Velocity},
    math::finite_or,
};

/// Center of the bounding box spanned by `touches`.
///
/// This is the midpoint of the extremes on each axis, not the mean of the
/// points. An empty set yields the origin.
pub fn center(touches: &[Point]) -> Point {
    let Some(first) = touches.first() else {
        return Point::ORIGIN;
    };

    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &touches[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}

/// Per-axis speed over `delta_time`. A zero time delta yields zero speed.
pub fn velocity(delta_time: f64, delta_x: f64, delta_y: f64) -> Velocity {
    Velocity {
        x: finite_or((delta_x / delta_time).abs(), 0.0),
        y: finite_or((delta_y / delta_time).abs(), 0.0),
    }
}

/// Angle of the segment `p1 -> p2` in degrees, in `(-180, 180]`.
pub fn angle(p1: Point, p2: Point) -> f64 {
    let deg = (p2 - p1).atan2() * 180.0 / PI;
    if deg == -180.0 { 180.0 } else { deg }
}

/// Dominant direction of travel from `p1` to `p2`; horizontal wins ties.
pub fn direction(p1: Point, p2: Point) -> Direction {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;

    if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if dy > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Pinch scale between two samples of the same finger pair.
///
/// Returns `1` unless both samples carry at least two touches. A zero starting
/// distance also yields `1`.
pub fn scale(start: &[Point], end: &[Point]) -> f64 {
    match (start, end) {
        ([s0, s1, ..], [e0, e1, ..]) => finite_or(distance(*e0, *e1) / distance(*s0, *s1), 1.0),
        _ => 1.0,
    }
}

/// Rotation in degrees between two samples of the same finger pair.
///
/// Angles are measured from the second finger to the first. Returns `0` unless
/// both samples carry at least two touches.
pub fn rotation(start: &[Point], end: &[Point]) -> f64 {
    match (start, end) {
        ([s0, s1, ..], [e0, e1, ..]) => angle(*e1, *e0) - angle(*s1, *s0),
        _ => 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/metrics.rs"]
mod tests;
