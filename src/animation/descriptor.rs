use std::{fmt, time::Duration};

use crate::{
    animation::ease::Ease,
    foundation::core::Direction,
    foundation::error::{MotionError, MotionResult},
};

/// Timing options shared by every preset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    /// `true` for an exit transition, `false` for an enter transition.
    pub out: bool,
    /// Duration in seconds.
    pub duration: f64,
    /// Timing function.
    pub ease: Ease,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            out: true,
            duration: 0.4,
            ease: Ease::EaseOut,
        }
    }
}

impl Timing {
    /// Duration as a [`Duration`], saturating when out of range.
    pub fn duration(&self) -> Duration {
        secs_to_duration(self.duration)
    }

    /// Reject durations that cannot be scheduled.
    pub fn validate(&self) -> MotionResult<()> {
        Duration::try_from_secs_f64(self.duration).map_err(|e| {
            MotionError::validation(format!(
                "duration must be finite, >= 0 and representable in seconds, got {}: {e}",
                self.duration
            ))
        })?;
        Ok(())
    }
}

/// Seconds to [`Duration`]; negative or NaN is zero, too large is [`Duration::MAX`].
pub(crate) fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(if secs > 0.0 {
        Duration::MAX
    } else {
        Duration::ZERO
    })
}

/// `slide`: translate the element by its own size toward `direction`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
    /// Edge the element slides toward.
    pub direction: Direction,
    /// Cross-fade opacity alongside the slide.
    pub is_fade: bool,
    /// Shrink to 0.8 while exiting; replaces the translate channel.
    pub is_scale: bool,
}

/// `fade`: opacity only.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
}

/// `pop`: scale from/to a point while stacking above the current layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
    /// Collapse to a point on exit; when `false` the exit only dims to 0.8.
    pub scale_on_exit: bool,
}

impl Default for PopConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            scale_on_exit: true,
        }
    }
}

/// `flip`: half turn around the Y (left/right) or X (up/down) axis.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlipConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
    /// Flip direction.
    pub direction: Direction,
}

/// `wipe`: reveal through a sliding gradient mask.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WipeConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
}

/// `roll`: roll in from the left edge.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
    /// Cross-fade opacity alongside the roll.
    pub is_fade: bool,
}

/// Horizontal component of the `rotate` pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    /// Pivot on the left edge.
    Left,
    /// Pivot on the horizontal center.
    #[default]
    Center,
    /// Pivot on the right edge.
    Right,
}

impl Horizon {
    /// CSS keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Second component of the `rotate` pivot. `up`/`down` are accepted as
/// aliases of `top`/`bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// `top`
    #[serde(alias = "up")]
    Top,
    /// `center`
    #[default]
    Center,
    /// `bottom`
    #[serde(alias = "down")]
    Bottom,
    /// `left`
    Left,
    /// `right`
    Right,
}

impl Anchor {
    /// CSS keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl From<Direction> for Anchor {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
            Direction::Up => Self::Top,
            Direction::Down => Self::Bottom,
        }
    }
}

/// `rotate`: spin around a pivot picked by `horizon` and `direction`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotateConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
    /// Horizontal pivot.
    pub horizon: Horizon,
    /// Vertical (or second) pivot keyword.
    pub direction: Anchor,
    /// Cross-fade opacity alongside the rotation.
    pub is_fade: bool,
}

/// `fold`: hinge on the edge opposite `direction`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoldConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
    /// Fold direction.
    pub direction: Direction,
    /// Cross-fade opacity alongside the fold.
    pub is_fade: bool,
}

/// `carousel`: swing in/out like a face of a rotating drum.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Shared timing.
    #[serde(flatten)]
    pub timing: Timing,
    /// Travel direction.
    pub direction: Direction,
    /// Cross-fade opacity alongside the swing.
    pub is_fade: bool,
}

/// Names of the available presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetKind {
    /// See [`SlideConfig`].
    Slide,
    /// See [`FadeConfig`].
    Fade,
    /// See [`PopConfig`].
    Pop,
    /// See [`FlipConfig`].
    Flip,
    /// See [`WipeConfig`].
    Wipe,
    /// See [`RollConfig`].
    Roll,
    /// See [`RotateConfig`].
    Rotate,
    /// See [`FoldConfig`].
    Fold,
    /// See [`CarouselConfig`].
    Carousel,
}

impl PresetKind {
    /// Every preset.
    pub const ALL: [PresetKind; 9] = [
        Self::Slide,
        Self::Fade,
        Self::Pop,
        Self::Flip,
        Self::Wipe,
        Self::Roll,
        Self::Rotate,
        Self::Fold,
        Self::Carousel,
    ];

    /// Lowercase preset name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Fade => "fade",
            Self::Pop => "pop",
            Self::Flip => "flip",
            Self::Wipe => "wipe",
            Self::Roll => "roll",
            Self::Rotate => "rotate",
            Self::Fold => "fold",
            Self::Carousel => "carousel",
        }
    }

    /// Look a preset up by name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A preset together with its configuration.
///
/// In JSON the preset is selected by a `"type"` key; all other keys are optional
/// and fall back to the preset's defaults:
///
/// ```json
/// { "type": "slide", "direction": "right", "out": false, "isFade": true }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnimationDescriptor {
    /// `slide`
    Slide(SlideConfig),
    /// `fade`
    Fade(FadeConfig),
    /// `pop`
    Pop(PopConfig),
    /// `flip`
    Flip(FlipConfig),
    /// `wipe`
    Wipe(WipeConfig),
    /// `roll`
    Roll(RollConfig),
    /// `rotate`
    Rotate(RotateConfig),
    /// `fold`
    Fold(FoldConfig),
    /// `carousel`
    Carousel(CarouselConfig),
}

impl AnimationDescriptor {
    /// Parse a preset name plus a parameter object.
    ///
    /// Returns `Ok(None)` for an unknown preset name. `params` may be `null`
    /// (all defaults) or an object; anything else, or an object with
    /// ill-typed keys, is a validation error.
    pub fn from_json(kind: &str, params: &serde_json::Value) -> MotionResult<Option<Self>> {
        let Some(kind) = PresetKind::from_name(kind) else {
            return Ok(None);
        };

        let mut obj = match params {
            serde_json::Value::Null => serde_json::Map::new(),
            serde_json::Value::Object(map) => map.clone(),
            _ => {
                return Err(MotionError::validation(format!(
                    "{kind} params must be an object"
                )));
            }
        };
        obj.insert("type".to_owned(), serde_json::Value::from(kind.name()));

        let desc: Self = serde_json::from_value(serde_json::Value::Object(obj))
            .map_err(|e| MotionError::serde(format!("invalid {kind} params: {e}")))?;
        desc.validate()?;
        Ok(Some(desc))
    }

    /// Which preset this descriptor selects.
    pub fn kind(&self) -> PresetKind {
        match self {
            Self::Slide(_) => PresetKind::Slide,
            Self::Fade(_) => PresetKind::Fade,
            Self::Pop(_) => PresetKind::Pop,
            Self::Flip(_) => PresetKind::Flip,
            Self::Wipe(_) => PresetKind::Wipe,
            Self::Roll(_) => PresetKind::Roll,
            Self::Rotate(_) => PresetKind::Rotate,
            Self::Fold(_) => PresetKind::Fold,
            Self::Carousel(_) => PresetKind::Carousel,
        }
    }

    /// Shared timing options.
    pub fn timing(&self) -> &Timing {
        match self {
            Self::Slide(c) => &c.timing,
            Self::Fade(c) => &c.timing,
            Self::Pop(c) => &c.timing,
            Self::Flip(c) => &c.timing,
            Self::Wipe(c) => &c.timing,
            Self::Roll(c) => &c.timing,
            Self::Rotate(c) => &c.timing,
            Self::Fold(c) => &c.timing,
            Self::Carousel(c) => &c.timing,
        }
    }

    /// Default descriptor for a preset.
    pub fn default_for(kind: PresetKind) -> Self {
        match kind {
            PresetKind::Slide => Self::Slide(SlideConfig::default()),
            PresetKind::Fade => Self::Fade(FadeConfig::default()),
            PresetKind::Pop => Self::Pop(PopConfig::default()),
            PresetKind::Flip => Self::Flip(FlipConfig::default()),
            PresetKind::Wipe => Self::Wipe(WipeConfig::default()),
            PresetKind::Roll => Self::Roll(RollConfig::default()),
            PresetKind::Rotate => Self::Rotate(RotateConfig::default()),
            PresetKind::Fold => Self::Fold(FoldConfig::default()),
            PresetKind::Carousel => Self::Carousel(CarouselConfig::default()),
        }
    }

    /// Check the descriptor before compiling.
    pub fn validate(&self) -> MotionResult<()> {
        self.timing().validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
