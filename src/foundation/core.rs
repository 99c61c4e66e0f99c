use std::{fmt, str::FromStr};

use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Point, Vec2};

/// Dominant direction of a swipe, or the edge an animation moves toward.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward negative x.
    #[default]
    Left,
    /// Toward positive x.
    Right,
    /// Toward negative y (page coordinates grow downward).
    Up,
    /// Toward positive y.
    Down,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// `true` for `Left` and `Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// `true` for the directions that mirror the sign used for `Left`/`Up`.
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    /// Lowercase keyword (`"left"`, `"right"`, `"up"`, `"down"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(MotionError::validation(format!(
                "unknown direction '{other}'"
            ))),
        }
    }
}

/// Absolute rate of change per axis, in page pixels per millisecond.
///
/// Components are never negative, NaN or infinite.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Velocity {
    /// Horizontal speed.
    pub x: f64,
    /// Vertical speed.
    pub y: f64,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    /// Larger of the two axis speeds.
    pub fn max_axis(self) -> f64 {
        self.x.max(self.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
