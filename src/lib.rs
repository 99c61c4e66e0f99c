//! touchmotion is the motion and gesture core of a mobile web UI toolkit.
//!
//! It has two independent halves, both pure:
//!
//! - **Gesture metrics** ([`gesture`]): turn samples of touch points into center,
//!   velocity, angle, direction, distance, pinch scale and rotation.
//! - **Preset compiler** ([`compile`]): turn an [`AnimationDescriptor`] (`slide`,
//!   `fade`, `pop`, `flip`, `wipe`, `roll`, `rotate`, `fold`, `carousel`) into
//!   one-time [`SetupEffect`]s plus an [`InterpolationPlan`] of ordered property
//!   channels for an external tween engine.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build an [`AnimationDescriptor`] in code or parse one from JSON
//!    ([`AnimationDescriptor::from_json`]).
//! 2. **Compile**: [`compile`] reads the target's current `z-index` and size and
//!    returns a [`Compilation`]. Nothing is written yet.
//! 3. **Apply**: [`animate`] writes the setup effects to the [`StyleTarget`], then
//!    hands the plan to a [`Tween`], or schedules completion on a [`Timer`] for
//!    presets the caller animates itself.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: equal descriptors against equal target state compile to
//!   equal plans; channel order never depends on hashing.
//! - **Total gesture math**: degenerate touch input yields neutral values, never
//!   errors or NaN.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod style;

/// Multi-touch gesture geometry.
pub mod gesture;

pub use animation::channel::{
    ChannelMap, ChannelValue, InterpolationPlan, Property, PropertyChannel, SetupEffect,
};
pub use animation::compile::{Compilation, Outcome, compile};
pub use animation::descriptor::{
    Anchor, AnimationDescriptor, CarouselConfig, FadeConfig, FlipConfig, FoldConfig, Horizon,
    PopConfig, PresetKind, RollConfig, RotateConfig, SlideConfig, Timing, WipeConfig,
};
pub use animation::driver::{Completion, Timer, Tween, animate, animate_named, apply_setup};
pub use animation::ease::Ease;
pub use foundation::core::{Direction, Point, Vec2, Velocity};
pub use foundation::error::{MotionError, MotionResult};
pub use gesture::{GestureMetrics, TouchSample, measure};
pub use style::inline::InlineStyle;
pub use style::naming::{camelize, css_name, normalize_property, style_key};
pub use style::target::StyleTarget;
