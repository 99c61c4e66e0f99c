use crate::{
    foundation::core::{Direction, Point, Vec2, Velocity},
    gesture::metrics,
};

/// Touch points observed at one instant.
///
/// Index `i` must refer to the same finger in every sample of a gesture; that
/// tracking happens before samples reach this crate.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TouchSample {
    /// Page coordinates of each active touch.
    pub touches: Vec<Point>,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
}

impl TouchSample {
    /// Build a sample from touches and a timestamp.
    pub fn new(touches: impl Into<Vec<Point>>, time_ms: f64) -> Self {
        Self {
            touches: touches.into(),
            time_ms,
        }
    }

    /// Bounding-box center of the sample's touches.
    pub fn center(&self) -> Point {
        metrics::center(&self.touches)
    }
}

/// Everything a recognizer needs to know about the motion between two samples.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GestureMetrics {
    /// Center of the end sample.
    pub center: Point,
    /// Movement of the center from start to end.
    pub delta: Vec2,
    /// Elapsed milliseconds between the samples.
    pub delta_time: f64,
    /// Speed of the center.
    pub velocity: Velocity,
    /// Angle of the center's travel in degrees.
    pub angle: f64,
    /// Dominant direction of the center's travel.
    pub direction: Direction,
    /// Distance travelled by the center.
    pub distance: f64,
    /// Pinch scale of the first finger pair (`1` without a pair).
    pub scale: f64,
    /// Rotation of the first finger pair in degrees (`0` without a pair).
    pub rotation: f64,
    /// Number of touches in the end sample.
    pub touch_count: usize,
}

/// Compute gesture metrics between a `start` and an `end` sample.
pub fn measure(start: &TouchSample, end: &TouchSample) -> GestureMetrics {
    let from = start.center();
    let to = end.center();
    let delta = to - from;
    let delta_time = end.time_ms - start.time_ms;

    GestureMetrics {
        center: to,
        delta,
        delta_time,
        velocity: metrics::velocity(delta_time, delta.x, delta.y),
        angle: metrics::angle(from, to),
        direction: metrics::direction(from, to),
        distance: metrics::distance(from, to),
        scale: metrics::scale(&start.touches, &end.touches),
        rotation: metrics::rotation(&start.touches, &end.touches),
        touch_count: end.touches.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/sample.rs"]
mod tests;
