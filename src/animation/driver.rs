use std::time::Duration;

use crate::{
    animation::channel::{InterpolationPlan, Property, SetupEffect},
    animation::compile::{Outcome, compile},
    animation::descriptor::AnimationDescriptor,
    foundation::error::MotionResult,
    style::target::StyleTarget,
};

/// Callback run once an animation has finished.
pub type Completion = Box<dyn FnOnce() + 'static>;

/// Tween engine that advances a plan over time.
pub trait Tween<T: StyleTarget + ?Sized> {
    /// Handle the engine returns for a running animation (e.g. for cancellation).
    type Handle;

    /// Start animating `target` along `plan`, calling `on_complete` at the end.
    fn start(
        &mut self,
        target: &mut T,
        plan: InterpolationPlan,
        on_complete: Completion,
    ) -> Self::Handle;
}

/// One-shot timer.
pub trait Timer {
    /// Run `callback` once `delay` has elapsed.
    fn after(&mut self, delay: Duration, callback: Completion);
}

/// Write setup effects to `target` in order. Mask properties are also written
/// under their `-webkit-` alias.
pub fn apply_setup<T: StyleTarget + ?Sized>(target: &mut T, setup: &[SetupEffect]) {
    for effect in setup {
        if matches!(effect.property, Property::MaskImage | Property::MaskSize)
            && let Some(alias) = effect.property.webkit_name()
        {
            target.set_style(alias, &effect.value);
        }
        target.set_style(effect.property.css_name(), &effect.value);
        tracing::debug!(property = %effect.property, value = %effect.value, "applied setup");
    }
}

/// Compile `desc`, apply its setup effects, then start the tween.
///
/// Returns the tween handle, or `None` when the preset defers completion (the
/// exiting `wipe`), in which case `on_complete` is scheduled on `timer`.
pub fn animate<T, W, R>(
    target: &mut T,
    desc: &AnimationDescriptor,
    on_complete: Completion,
    tween: &mut W,
    timer: &mut R,
) -> MotionResult<Option<W::Handle>>
where
    T: StyleTarget + ?Sized,
    W: Tween<T>,
    R: Timer,
{
    let compiled = compile(desc, &*target)?;
    apply_setup(target, &compiled.setup);

    match compiled.outcome {
        Outcome::Tween(plan) => Ok(Some(tween.start(target, plan, on_complete))),
        Outcome::CompleteAfter(delay) => {
            timer.after(delay, on_complete);
            Ok(None)
        }
    }
}

/// [`animate`] with the preset selected by name.
///
/// Unknown names return `Ok(None)` without touching the target or calling
/// either capability.
pub fn animate_named<T, W, R>(
    target: &mut T,
    kind: &str,
    params: &serde_json::Value,
    on_complete: Completion,
    tween: &mut W,
    timer: &mut R,
) -> MotionResult<Option<W::Handle>>
where
    T: StyleTarget + ?Sized,
    W: Tween<T>,
    R: Timer,
{
    let Some(desc) = AnimationDescriptor::from_json(kind, params)? else {
        tracing::debug!(kind, "unknown preset");
        return Ok(None);
    };
    animate(target, &desc, on_complete, tween, timer)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
