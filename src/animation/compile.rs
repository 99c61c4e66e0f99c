use std::time::Duration;

use crate::{
    animation::channel::{ChannelMap, InterpolationPlan, Property, SetupEffect},
    animation::descriptor::{
        AnimationDescriptor, CarouselConfig, FadeConfig, FlipConfig, FoldConfig, Horizon,
        PopConfig, RollConfig, RotateConfig, SlideConfig, Timing, WipeConfig,
    },
    foundation::core::{Direction, Vec2},
    foundation::error::{MotionError, MotionResult},
    foundation::math::css_number,
    style::target::{StyleTarget, current_z_index},
};

const IDENTITY_3D: &str = "translate3d(0, 0, 0) rotate(0)";
const WIPE_MASK: &str = "-webkit-gradient(linear, left bottom, right bottom, from(transparent), to(#000), color-stop(66%, #000), color-stop(33%, transparent))";

/// What the caller does once setup effects are applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Hand the plan to the tween engine.
    Tween(InterpolationPlan),
    /// No tween: the caller owns the animation and only signals completion after
    /// the given delay.
    CompleteAfter(Duration),
}

/// Result of compiling one descriptor against one target.
#[derive(Clone, Debug, PartialEq)]
pub struct Compilation {
    /// Non-animatable writes, to apply in order before the tween starts.
    pub setup: Vec<SetupEffect>,
    /// Tween plan or deferred completion.
    pub outcome: Outcome,
}

impl Compilation {
    /// The plan, unless completion is deferred.
    pub fn plan(&self) -> Option<&InterpolationPlan> {
        match &self.outcome {
            Outcome::Tween(plan) => Some(plan),
            Outcome::CompleteAfter(_) => None,
        }
    }

    /// Consume into the plan, unless completion is deferred.
    pub fn into_plan(self) -> Option<InterpolationPlan> {
        match self.outcome {
            Outcome::Tween(plan) => Some(plan),
            Outcome::CompleteAfter(_) => None,
        }
    }
}

#[derive(Default)]
struct Builder {
    setup: Vec<SetupEffect>,
    channels: ChannelMap,
}

impl Builder {
    fn setup(&mut self, property: Property, value: impl Into<String>) {
        self.setup.push(SetupEffect::new(property, value));
    }

    fn fade(&mut self, out: bool) {
        let (from, to) = if out { (1.0, 0.0) } else { (0.0, 1.0) };
        self.channels.upsert(Property::Opacity, from, to);
    }

    /// Transform from `enter_from` to `enter_to` when entering, reversed when exiting.
    fn mirrored_transform(&mut self, out: bool, enter_from: &str, enter_to: &str) {
        let (from, to) = if out {
            (enter_to, enter_from)
        } else {
            (enter_from, enter_to)
        };
        self.channels.upsert(Property::Transform, from, to);
    }

    fn tween(self, timing: &Timing) -> Compilation {
        Compilation {
            setup: self.setup,
            outcome: Outcome::Tween(InterpolationPlan {
                channels: self.channels,
                duration_secs: timing.duration,
                ease: timing.ease,
            }),
        }
    }
}

/// Compile a descriptor into setup effects plus a tween plan.
///
/// The target is only read (current `z-index`, layout size). Identical
/// descriptors against identical target state compile to equal results.
#[tracing::instrument(skip(target), fields(kind = %desc.kind()))]
pub fn compile<T: StyleTarget + ?Sized>(
    desc: &AnimationDescriptor,
    target: &T,
) -> MotionResult<Compilation> {
    desc.validate()?;

    let compiled = match desc {
        AnimationDescriptor::Slide(c) => slide(c),
        AnimationDescriptor::Fade(c) => fade(c),
        AnimationDescriptor::Pop(c) => pop(c, current_z_index(target)),
        AnimationDescriptor::Flip(c) => flip(c),
        AnimationDescriptor::Wipe(c) => wipe(c, target)?,
        AnimationDescriptor::Roll(c) => roll(c),
        AnimationDescriptor::Rotate(c) => rotate(c),
        AnimationDescriptor::Fold(c) => fold(c),
        AnimationDescriptor::Carousel(c) => carousel(c),
    };

    tracing::debug!(
        setup = compiled.setup.len(),
        channels = compiled.plan().map_or(0, |p| p.channels.len()),
        "compiled preset"
    );
    Ok(compiled)
}

fn translate3d(v: Vec2) -> String {
    format!("translate3d({}%, {}%, 0)", css_number(v.x), css_number(v.y))
}

fn slide(c: &SlideConfig) -> Compilation {
    const OFFSET: f64 = 100.0;

    let out = c.timing.out;
    let (mut from, mut to) = (Vec2::ZERO, Vec2::ZERO);
    let travel = if c.direction.is_horizontal() {
        Vec2::new(OFFSET, 0.0)
    } else {
        Vec2::new(0.0, OFFSET)
    };
    if out {
        to = -travel;
    } else {
        from = travel;
    }
    if c.direction.is_mirrored() {
        from = -from;
        to = -to;
    }

    let mut b = Builder::default();
    b.channels
        .upsert(Property::Transform, translate3d(from), translate3d(to));
    if c.is_fade {
        b.fade(out);
    }
    if c.is_scale && out {
        // Overrides both the translate and any fade channel.
        b.channels
            .upsert(Property::Transform, "scale(1)", "scale(0.8)");
        b.channels.upsert(Property::Opacity, 0.0, 1.0);
    }
    b.tween(&c.timing)
}

fn fade(c: &FadeConfig) -> Compilation {
    let mut b = Builder::default();
    b.fade(c.timing.out);
    b.tween(&c.timing)
}

fn pop(c: &PopConfig, current_z: i32) -> Compilation {
    let (from_scale, to_scale, from_opacity, to_opacity, stack_z) = if !c.timing.out {
        (0.01, 1.0, 0.0, 1.0, current_z.saturating_add(1))
    } else if c.scale_on_exit {
        (1.0, 0.01, 1.0, 0.0, current_z)
    } else {
        (1.0, 1.0, 1.0, 0.8, current_z)
    };
    let stack_z = f64::from(stack_z);

    let mut b = Builder::default();
    b.channels.upsert(
        Property::Transform,
        format!("scale({})", css_number(from_scale)),
        format!("scale({})", css_number(to_scale)),
    );
    b.channels
        .upsert(Property::TransformOrigin, "50% 50%", "50% 50%");
    b.channels
        .upsert(Property::Opacity, from_opacity, to_opacity);
    b.channels.upsert(Property::ZIndex, stack_z, stack_z);
    b.tween(&c.timing)
}

fn flip(c: &FlipConfig) -> Compilation {
    let axis = if c.direction.is_horizontal() { 'Y' } else { 'X' };
    let (mut from_deg, mut to_deg, from_scale, to_scale) = if c.timing.out {
        (0.0, -180.0, 1.0, 0.8)
    } else {
        (180.0, 0.0, 0.8, 1.0)
    };
    if c.direction.is_mirrored() {
        from_deg = -from_deg;
        to_deg = -to_deg;
    }

    let transform = |deg: f64, scale: f64| {
        format!(
            "rotate{axis}({}deg) scale({})",
            css_number(deg),
            css_number(scale)
        )
    };

    let mut b = Builder::default();
    b.setup(Property::BackfaceVisibility, "hidden");
    b.channels.upsert(
        Property::Transform,
        transform(from_deg, from_scale),
        transform(to_deg, to_scale),
    );
    b.tween(&c.timing)
}

fn wipe<T: StyleTarget + ?Sized>(c: &WipeConfig, target: &T) -> MotionResult<Compilation> {
    if c.timing.out {
        let delay = c.timing.duration();
        tracing::debug!(?delay, "wipe exit defers completion to the caller");
        return Ok(Compilation {
            setup: Vec::new(),
            outcome: Outcome::CompleteAfter(delay),
        });
    }

    let (width, height) = (target.width(), target.height());
    if !width.is_finite() || !height.is_finite() {
        return Err(MotionError::animation(
            "wipe needs a finite target width and height",
        ));
    }
    let z = current_z_index(target).saturating_add(1);

    let mut b = Builder::default();
    b.setup(Property::MaskImage, WIPE_MASK);
    b.setup(
        Property::MaskSize,
        format!("{}px {}px", css_number(width * 3.0), css_number(height)),
    );
    b.setup(Property::ZIndex, z.to_string());
    b.channels.upsert(
        Property::MaskPositionX,
        "0",
        format!("{}px", css_number(-width)),
    );
    Ok(b.tween(&c.timing))
}

fn roll(c: &RollConfig) -> Compilation {
    let mut b = Builder::default();
    b.mirrored_transform(
        c.timing.out,
        "translateX(-100%) rotate(-120deg)",
        "translateX(0px) rotate(0deg)",
    );
    if c.is_fade {
        b.fade(c.timing.out);
    }
    b.tween(&c.timing)
}

fn rotate(c: &RotateConfig) -> Compilation {
    let start = match c.horizon {
        Horizon::Left => "rotate(90deg)",
        Horizon::Right => "rotate(-90deg)",
        Horizon::Center => "rotate(200deg)",
    };

    let mut b = Builder::default();
    b.setup(
        Property::TransformOrigin,
        format!("{} {}", c.horizon.as_str(), c.direction.as_str()),
    );
    b.mirrored_transform(c.timing.out, start, "rotate(0)");
    if c.is_fade {
        b.fade(c.timing.out);
    }
    b.tween(&c.timing)
}

struct FoldGeometry {
    origin: &'static str,
    start: &'static str,
}

fn fold_geometry(direction: Direction) -> FoldGeometry {
    match direction {
        Direction::Left => FoldGeometry {
            origin: "100% 50%",
            start: "translateX(-100%) rotateY(-90deg)",
        },
        Direction::Right => FoldGeometry {
            origin: "0% 50%",
            start: "translateX(100%) rotateY(90deg)",
        },
        Direction::Up => FoldGeometry {
            origin: "50% 100%",
            start: "translateY(-100%) rotateX(90deg)",
        },
        Direction::Down => FoldGeometry {
            origin: "50% 0%",
            start: "translateY(100%) rotateX(-90deg)",
        },
    }
}

fn fold(c: &FoldConfig) -> Compilation {
    let geo = fold_geometry(c.direction);

    let mut b = Builder::default();
    b.setup(Property::TransformOrigin, geo.origin);
    b.mirrored_transform(c.timing.out, geo.start, IDENTITY_3D);
    if c.is_fade {
        b.fade(c.timing.out);
    }
    b.tween(&c.timing)
}

struct CarouselGeometry {
    origin_in: &'static str,
    origin_out: &'static str,
    start_in: &'static str,
    start_out: &'static str,
}

fn carousel_geometry(direction: Direction) -> CarouselGeometry {
    match direction {
        Direction::Left => CarouselGeometry {
            origin_out: "100% 50%",
            origin_in: "0% 50%",
            start_out: "translateX(-200%) scale(.4) rotateY(-65deg)",
            start_in: "translateX(200%) scale(.4) rotateY(65deg)",
        },
        Direction::Right => CarouselGeometry {
            origin_out: "0% 50%",
            origin_in: "100% 50%",
            start_out: "translateX(200%) scale(.4) rotateY(65deg)",
            start_in: "translateX(-200%) scale(.4) rotateY(-65deg)",
        },
        Direction::Up => CarouselGeometry {
            origin_out: "50% 100%",
            origin_in: "50% 0%",
            start_out: "translateY(-200%) scale(.4) rotateX(65deg)",
            start_in: "translateY(200%) scale(.4) rotateX(-65deg)",
        },
        Direction::Down => CarouselGeometry {
            origin_out: "50% 0%",
            origin_in: "50% 100%",
            start_out: "translateY(200%) scale(.4) rotateX(-65deg)",
            start_in: "translateY(-200%) scale(.4) rotateX(65deg)",
        },
    }
}

fn carousel(c: &CarouselConfig) -> Compilation {
    let geo = carousel_geometry(c.direction);
    let out = c.timing.out;

    // An exiting face pivots on its `in` edge and swings toward the `in` pose.
    let (origin, from, to) = if out {
        (geo.origin_in, IDENTITY_3D, geo.start_in)
    } else {
        (geo.origin_out, geo.start_out, IDENTITY_3D)
    };

    let mut b = Builder::default();
    b.setup(Property::TransformOrigin, origin);
    b.channels.upsert(Property::Transform, from, to);
    if c.is_fade {
        b.fade(out);
    }
    b.tween(&c.timing)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/compile.rs"]
mod tests;
