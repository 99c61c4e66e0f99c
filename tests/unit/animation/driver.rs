use std::{cell::Cell, rc::Rc};

use super::*;
use crate::{
    animation::descriptor::{FadeConfig, FlipConfig, Timing, WipeConfig},
    style::inline::InlineStyle,
};

#[derive(Default)]
struct RecordingTween {
    started: Vec<(InterpolationPlan, usize)>,
    pending: Vec<Completion>,
}

impl Tween<InlineStyle> for RecordingTween {
    type Handle = usize;

    fn start(
        &mut self,
        target: &mut InlineStyle,
        plan: InterpolationPlan,
        on_complete: Completion,
    ) -> usize {
        // Record how many writes had landed when the tween was constructed.
        self.started.push((plan, target.writes().len()));
        self.pending.push(on_complete);
        self.started.len() - 1
    }
}

#[derive(Default)]
struct RecordingTimer {
    scheduled: Vec<(Duration, Completion)>,
}

impl Timer for RecordingTimer {
    fn after(&mut self, delay: Duration, callback: Completion) {
        self.scheduled.push((delay, callback));
    }
}

fn flag() -> (Rc<Cell<bool>>, Completion) {
    let done = Rc::new(Cell::new(false));
    let hook = done.clone();
    (done, Box::new(move || hook.set(true)))
}

#[test]
fn setup_lands_before_tween_starts() {
    let mut el = InlineStyle::new(100.0, 100.0);
    let mut tween = RecordingTween::default();
    let mut timer = RecordingTimer::default();
    let (done, on_complete) = flag();

    let desc = AnimationDescriptor::Flip(FlipConfig::default());
    let handle = animate(&mut el, &desc, on_complete, &mut tween, &mut timer).unwrap();

    assert_eq!(handle, Some(0));
    assert_eq!(tween.started.len(), 1);
    assert_eq!(tween.started[0].1, 1);
    assert_eq!(el.inline("backface-visibility"), Some("hidden"));
    assert!(timer.scheduled.is_empty());

    assert!(!done.get());
    (tween.pending.remove(0))();
    assert!(done.get());
}

#[test]
fn wipe_enter_writes_mask_aliases_then_tweens() {
    let mut el = InlineStyle::new(50.0, 20.0);
    let mut tween = RecordingTween::default();
    let mut timer = RecordingTimer::default();
    let (_, on_complete) = flag();

    let desc = AnimationDescriptor::Wipe(WipeConfig {
        timing: Timing {
            out: false,
            ..Timing::default()
        },
    });
    animate(&mut el, &desc, on_complete, &mut tween, &mut timer).unwrap();

    assert_eq!(el.inline("-webkit-mask-size"), Some("150px 20px"));
    assert_eq!(el.inline("mask-size"), Some("150px 20px"));
    assert!(el.inline("-webkit-mask-image").is_some());
    assert_eq!(el.inline("z-index"), Some("1"));
    assert_eq!(tween.started[0].1, el.writes().len());
}

#[test]
fn wipe_exit_schedules_completion_instead_of_tweening() {
    let mut el = InlineStyle::new(50.0, 20.0);
    let mut tween = RecordingTween::default();
    let mut timer = RecordingTimer::default();
    let (done, on_complete) = flag();

    let desc = AnimationDescriptor::Wipe(WipeConfig::default());
    let handle = animate(&mut el, &desc, on_complete, &mut tween, &mut timer).unwrap();

    assert_eq!(handle, None);
    assert!(tween.started.is_empty());
    assert!(el.writes().is_empty());
    assert_eq!(timer.scheduled.len(), 1);
    assert_eq!(timer.scheduled[0].0, Duration::from_millis(400));

    assert!(!done.get());
    let (_, callback) = timer.scheduled.remove(0);
    callback();
    assert!(done.get());
}

#[test]
fn named_entry_point_short_circuits_unknown_presets() {
    let mut el = InlineStyle::new(10.0, 10.0);
    let mut tween = RecordingTween::default();
    let mut timer = RecordingTimer::default();
    let (_, on_complete) = flag();

    let handle = animate_named(
        &mut el,
        "teleport",
        &serde_json::json!({"out": false}),
        on_complete,
        &mut tween,
        &mut timer,
    )
    .unwrap();
    assert_eq!(handle, None);
    assert!(tween.started.is_empty());
    assert!(timer.scheduled.is_empty());
    assert!(el.writes().is_empty());
}

#[test]
fn named_entry_point_compiles_known_presets() {
    let mut el = InlineStyle::new(10.0, 10.0);
    let mut tween = RecordingTween::default();
    let mut timer = RecordingTimer::default();
    let (_, on_complete) = flag();

    let handle = animate_named(
        &mut el,
        "fade",
        &serde_json::json!({"out": false, "duration": 0.2}),
        on_complete,
        &mut tween,
        &mut timer,
    )
    .unwrap();
    assert_eq!(handle, Some(0));

    let expected = compile(
        &AnimationDescriptor::Fade(FadeConfig {
            timing: Timing {
                out: false,
                duration: 0.2,
                ..Timing::default()
            },
        }),
        &InlineStyle::new(10.0, 10.0),
    )
    .unwrap()
    .into_plan()
    .unwrap();
    assert_eq!(tween.started[0].0, expected);
}

#[test]
fn named_entry_point_propagates_malformed_params() {
    let mut el = InlineStyle::new(10.0, 10.0);
    let mut tween = RecordingTween::default();
    let mut timer = RecordingTimer::default();
    let (_, on_complete) = flag();

    let res = animate_named(
        &mut el,
        "carousel",
        &serde_json::json!({"direction": 3}),
        on_complete,
        &mut tween,
        &mut timer,
    );
    assert!(res.is_err());
    assert!(el.writes().is_empty());
}
