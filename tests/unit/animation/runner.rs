use super::*;
use crate::animation::descriptor::Descriptor;
use crate::carousel::host::NullHost;
use crate::carousel::registry::SlideRegistry;
use crate::carousel::slide::{ContentHandle, Slide};
use crate::foundation::core::Vec2;

fn registry(n: u64) -> SlideRegistry<u32> {
    let mut reg = SlideRegistry::new();
    for i in 1..=n {
        reg.push(Slide::new(SlideId(i), ContentHandle(i), i as u32))
            .unwrap();
    }
    reg
}

#[test]
fn empty_part_never_runs() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let handle = runner.start(
        SlideId(1),
        &[],
        PlayDirection::Forward,
        Millis(16),
        Millis(250),
        Millis(0),
        &mut reg,
        &mut NullHost,
    );
    assert!(handle.is_none());
    assert_eq!(runner.active_count(), 0);
    assert!(reg.get(0).unwrap().visual().is_resting());
}

#[test]
fn unknown_slide_never_runs() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let part = [Descriptor::fade(0.0, 1.0)];
    let handle = runner.start(
        SlideId(99),
        &part,
        PlayDirection::Forward,
        Millis(16),
        Millis(250),
        Millis(0),
        &mut reg,
        &mut NullHost,
    );
    assert!(handle.is_none());
}

#[test]
fn start_applies_the_initial_sample() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let part = [Descriptor::fade(0.0, 1.0)];
    runner
        .start(
            SlideId(1),
            &part,
            PlayDirection::Forward,
            Millis(16),
            Millis(100),
            Millis(0),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();
    // The slide holds its starting pose before the first tick.
    assert_eq!(reg.get(0).unwrap().visual().opacity, 0.0);
}

#[test]
fn run_samples_then_completes_with_finish_hook() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let part = [Descriptor::fade(0.2, 0.8)];
    let handle = runner
        .start(
            SlideId(1),
            &part,
            PlayDirection::Forward,
            Millis(10),
            Millis(100),
            Millis(0),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();

    assert!(runner.tick(Millis(50), &mut reg, &mut NullHost).is_empty());
    let mid = reg.get(0).unwrap().visual().opacity;
    assert!((mid - 0.5).abs() < 1e-12);
    assert!(runner.is_running(handle));

    let done = runner.tick(Millis(100), &mut reg, &mut NullHost);
    assert_eq!(
        done,
        vec![RunCompletion {
            handle,
            slide: SlideId(1),
            completed: true
        }]
    );
    // Finish-hook restored the resting value, not the end value.
    assert_eq!(reg.get(0).unwrap().visual().opacity, 1.0);
    assert_eq!(runner.active_count(), 0);
}

#[test]
fn sampling_honors_the_rate() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let part = [Descriptor::fade(0.0, 1.0)];
    runner
        .start(
            SlideId(1),
            &part,
            PlayDirection::Forward,
            Millis(50),
            Millis(200),
            Millis(0),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();

    // Not due yet: the value stays at the initial sample.
    runner.tick(Millis(10), &mut reg, &mut NullHost);
    assert_eq!(reg.get(0).unwrap().visual().opacity, 0.0);

    runner.tick(Millis(50), &mut reg, &mut NullHost);
    assert!((reg.get(0).unwrap().visual().opacity - 0.25).abs() < 1e-12);
}

#[test]
fn abort_restores_resting_state_and_is_idempotent() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let part = [
        Descriptor::translate(Vec2::new(1.0, 0.0), Vec2::ZERO),
        Descriptor::scale(0.0, 1.0),
    ];
    let handle = runner
        .start(
            SlideId(1),
            &part,
            PlayDirection::Forward,
            Millis(16),
            Millis(250),
            Millis(0),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();
    runner.tick(Millis(100), &mut reg, &mut NullHost);
    assert!(!reg.get(0).unwrap().visual().is_resting());

    let aborted = runner.abort_for_slide(SlideId(1), &mut reg, &mut NullHost);
    assert_eq!(
        aborted,
        Some(RunCompletion {
            handle,
            slide: SlideId(1),
            completed: false
        })
    );
    assert!(reg.get(0).unwrap().visual().is_resting());

    // Aborting again (or a slide that never ran) is a no-op.
    assert!(runner.abort_for_slide(SlideId(1), &mut reg, &mut NullHost).is_none());
}

#[test]
fn vanished_slide_degrades_to_noop() {
    let mut reg = registry(2);
    let mut runner = AnimationRunner::new();
    let part = [Descriptor::fade(0.0, 1.0)];
    let handle = runner
        .start(
            SlideId(1),
            &part,
            PlayDirection::Forward,
            Millis(16),
            Millis(100),
            Millis(0),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();

    reg.remove(SlideId(1)).unwrap();
    let done = runner.tick(Millis(50), &mut reg, &mut NullHost);
    assert_eq!(
        done,
        vec![RunCompletion {
            handle,
            slide: SlideId(1),
            completed: false
        }]
    );
    assert_eq!(runner.active_count(), 0);
}

#[test]
fn duration_override_finishes_a_descriptor_early() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let part = [
        Descriptor::fade(0.0, 1.0).with_duration(Millis(100)),
        Descriptor::scale(0.0, 1.0),
    ];
    runner
        .start(
            SlideId(1),
            &part,
            PlayDirection::Forward,
            Millis(10),
            Millis(200),
            Millis(0),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();

    runner.tick(Millis(100), &mut reg, &mut NullHost);
    let visual = *reg.get(0).unwrap().visual();
    assert_eq!(visual.opacity, 1.0);
    assert!((visual.scale - 0.5).abs() < 1e-12);
    assert!(runner.is_running_for(SlideId(1)));
}

#[test]
fn starting_supersedes_the_existing_run() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let fade = [Descriptor::fade(0.0, 0.5)];
    let scale = [Descriptor::scale(0.0, 1.0)];
    let first = runner
        .start(
            SlideId(1),
            &fade,
            PlayDirection::Forward,
            Millis(16),
            Millis(250),
            Millis(0),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();
    let second = runner
        .start(
            SlideId(1),
            &scale,
            PlayDirection::Forward,
            Millis(16),
            Millis(250),
            Millis(10),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(runner.active_count(), 1);
    assert!(!runner.is_running(first));
    // The superseded fade's finish-hook restored opacity before scale began.
    assert_eq!(reg.get(0).unwrap().visual().opacity, 1.0);
}

#[test]
fn zero_duration_completes_at_the_first_tick() {
    let mut reg = registry(1);
    let mut runner = AnimationRunner::new();
    let part = [Descriptor::fade(0.0, 1.0)];
    runner
        .start(
            SlideId(1),
            &part,
            PlayDirection::Forward,
            Millis(16),
            Millis(0),
            Millis(5),
            &mut reg,
            &mut NullHost,
        )
        .unwrap();
    let done = runner.tick(Millis(5), &mut reg, &mut NullHost);
    assert_eq!(done.len(), 1);
    assert!(done[0].completed);
}
