//! Functions take page-coordinate [`Point`](crate::Point)s. Pair-based functions
//! ([`scale`], [`rotation`]) expect index `i` to be the same finger in both
//! samples.

mod metrics;
mod sample;

pub use metrics::{angle, center, direction, distance, rotation, scale, velocity};
pub use sample::{GestureMetrics, TouchSample, measure};
