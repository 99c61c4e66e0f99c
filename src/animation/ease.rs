use std::{fmt, str::FromStr};

use kurbo::{CubicBez, ParamCurve, Point};

use crate::foundation::error::{MotionError, MotionResult};

/// CSS timing function handed to the tween engine alongside a plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// `linear`
    Linear,
    /// `ease`
    Ease,
    /// `ease-in`
    EaseIn,
    /// `ease-out`, the preset default.
    #[default]
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; `x1` and `x2` lie in `[0, 1]`.
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    /// Build a validated `cubic-bezier` easing.
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> MotionResult<Self> {
        let all_finite = [x1, y1, x2, y2].iter().all(|v| v.is_finite());
        if !all_finite || !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(MotionError::validation(
                "cubic-bezier x control points must be finite and within [0, 1]",
            ));
        }
        Ok(Self::CubicBezier(x1, y1, x2, y2))
    }

    /// Inner control points of the curve from `(0, 0)` to `(1, 1)`.
    pub fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Self::Linear => None,
            Self::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Self::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return t;
        };
        if t == 0.0 || t == 1.0 {
            return t;
        }

        let curve = CubicBez::new(
            Point::ORIGIN,
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(1.0, 1.0),
        );

        // x(s) is monotonic for x1, x2 in [0, 1].
        let (mut lo, mut hi) = (0.0f64, 1.0f64);
        let mut s = t;
        for _ in 0..64 {
            let x = curve.eval(s).x;
            if (x - t).abs() < 1e-9 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        curve.eval(s).y
    }

    /// CSS text of the timing function.
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::Ease => "ease".to_owned(),
            Self::EaseIn => "ease-in".to_owned(),
            Self::EaseOut => "ease-out".to_owned(),
            Self::EaseInOut => "ease-in-out".to_owned(),
            Self::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "linear" => return Ok(Self::Linear),
            "ease" => return Ok(Self::Ease),
            "ease-in" => return Ok(Self::EaseIn),
            "ease-out" => return Ok(Self::EaseOut),
            "ease-in-out" => return Ok(Self::EaseInOut),
            _ => {}
        }

        let args = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| MotionError::validation(format!("unknown ease '{s}'")))?;
        let nums = args
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MotionError::validation(format!("bad cubic-bezier argument: {e}")))?;
        match nums.as_slice() {
            [x1, y1, x2, y2] => Self::cubic_bezier(*x1, *y1, *x2, *y2),
            _ => Err(MotionError::validation(
                "cubic-bezier takes exactly four arguments",
            )),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = MotionError;

    fn try_from(value: String) -> MotionResult<Self> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.css()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
