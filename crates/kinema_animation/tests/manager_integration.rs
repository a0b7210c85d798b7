//! Integration tests for the animation manager
//!
//! These tests verify that:
//! - entries are registered, advanced, and retired through the manager
//! - interpolated values land on the target's named property
//! - the redraw callback is batched to at most once per tick
//! - callbacks may add/remove entries mid-tick without corruption
//! - the global accessor and reset lifecycle behave

use kinema_animation::{
    AnimTarget, AnimValue, AnimationManager, Color, Easing, Keyframe, KeyframeAnimation,
    SharedTarget, Tween,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A fake drawable recording every property write.
#[derive(Default)]
struct FakeShape {
    props: HashMap<String, AnimValue>,
    writes: usize,
}

impl AnimTarget for FakeShape {
    fn set_property(&mut self, name: &str, value: &AnimValue) {
        self.props.insert(name.to_string(), value.clone());
        self.writes += 1;
    }
}

fn shape() -> Rc<RefCell<FakeShape>> {
    Rc::new(RefCell::new(FakeShape::default()))
}

fn tween(from: f64, to: f64, duration_ms: f32) -> kinema_animation::Animation {
    Tween::new(from, to).duration(duration_ms).build().unwrap()
}

/// Test that a tick writes the interpolated value onto the named property
#[test]
fn test_tick_writes_value_onto_target_property() {
    let manager = AnimationManager::new();
    let target = shape();
    manager.add(tween(0.0, 100.0, 1000.0), target.clone(), "x");

    manager.tick(250.0);

    assert_eq!(
        target.borrow().props.get("x"),
        Some(&AnimValue::Number(25.0))
    );
}

/// Test that animations on different properties of one target are independent
#[test]
fn test_independent_properties_on_one_target() {
    let manager = AnimationManager::new();
    let target = shape();
    let x = manager.add(tween(0.0, 100.0, 100.0), target.clone(), "x");
    manager.add(tween(0.0, 50.0, 200.0), target.clone(), "y");

    manager.tick(50.0);
    assert_eq!(
        target.borrow().props.get("x"),
        Some(&AnimValue::Number(50.0))
    );
    assert_eq!(
        target.borrow().props.get("y"),
        Some(&AnimValue::Number(12.5))
    );

    // Removing one leaves the other advancing
    manager.remove(x);
    manager.tick(50.0);
    assert_eq!(
        target.borrow().props.get("x"),
        Some(&AnimValue::Number(50.0))
    );
    assert_eq!(
        target.borrow().props.get("y"),
        Some(&AnimValue::Number(25.0))
    );
}

/// Test that completed entries are retired during the tick that completes them
#[test]
fn test_completed_entries_retired_and_final_value_written() {
    let manager = AnimationManager::new();
    let target = shape();
    manager.add(tween(0.0, 100.0, 50.0), target.clone(), "short");
    manager.add(tween(0.0, 100.0, 500.0), target.clone(), "long");
    assert_eq!(manager.active_count(), 2);

    manager.tick(100.0);

    // N = 2 entries, M = 1 completed: count is N - M
    assert_eq!(manager.active_count(), 1);
    assert_eq!(
        target.borrow().props.get("short"),
        Some(&AnimValue::Number(100.0))
    );
    // The long entry's fraction (100/500) is not binary-representable
    let long = target.borrow().props["long"].as_number().unwrap();
    assert!((long - 20.0).abs() < 1e-4);
}

/// Test that the redraw callback fires exactly once per tick, not per entry
#[test]
fn test_redraw_batched_once_per_tick() {
    let manager = AnimationManager::new();
    let target = shape();
    let redraws = Rc::new(RefCell::new(0u32));
    let seen = redraws.clone();
    manager.set_refresh_callback(move || *seen.borrow_mut() += 1);

    for i in 0..4 {
        manager.add(tween(0.0, 100.0, 1000.0), target.clone(), format!("p{i}"));
    }

    manager.tick(100.0);
    assert_eq!(*redraws.borrow(), 1);

    manager.tick(100.0);
    assert_eq!(*redraws.borrow(), 2);
}

/// Test that a tick with no value changes does not fire the redraw callback
#[test]
fn test_redraw_skipped_when_nothing_changed() {
    let manager = AnimationManager::new();
    let target = shape();
    let redraws = Rc::new(RefCell::new(0u32));
    let seen = redraws.clone();
    manager.set_refresh_callback(move || *seen.borrow_mut() += 1);

    manager.add(tween(0.0, 100.0, 100.0), target.clone(), "x");

    manager.tick(40.0);
    assert_eq!(*redraws.borrow(), 1);

    // Zero delta: value identical to the last written one
    manager.tick(0.0);
    assert_eq!(*redraws.borrow(), 1);

    // Paused animations hold their value, so nothing changes either
    manager.pause_all();
    manager.tick(40.0);
    assert_eq!(*redraws.borrow(), 1);

    manager.resume_all();
    manager.tick(40.0);
    assert_eq!(*redraws.borrow(), 2);
}

/// Test pause_all freezes every entry and resume_all continues them
#[test]
fn test_pause_all_and_resume_all() {
    let manager = AnimationManager::new();
    let target = shape();
    manager.add(tween(0.0, 100.0, 100.0), target.clone(), "x");

    manager.tick(25.0);
    manager.pause_all();
    manager.tick(1000.0);
    assert_eq!(
        target.borrow().props.get("x"),
        Some(&AnimValue::Number(25.0))
    );

    // Resume continues from the paused point, not from zero
    manager.resume_all();
    manager.tick(25.0);
    assert_eq!(
        target.borrow().props.get("x"),
        Some(&AnimValue::Number(50.0))
    );
}

/// Test that an on_update callback may add a new entry mid-tick; the
/// addition is deferred to the next tick
#[test]
fn test_mid_tick_add_is_deferred() {
    let manager = AnimationManager::new();
    let target = shape();

    let mgr = manager.clone();
    let tgt: SharedTarget = target.clone();
    let added = Rc::new(RefCell::new(false));
    let added_flag = added.clone();

    let spawner = Tween::new(0.0, 100.0)
        .duration(100.0)
        .on_update(move |_| {
            if !*added_flag.borrow() {
                *added_flag.borrow_mut() = true;
                mgr.add(tween(0.0, 1.0, 100.0), tgt.clone(), "spawned");
            }
        })
        .build()
        .unwrap();
    manager.add(spawner, target.clone(), "x");

    manager.tick(10.0);
    assert_eq!(manager.active_count(), 2);
    // The spawned entry was not advanced (and not written) this tick
    assert!(!target.borrow().props.contains_key("spawned"));

    manager.tick(10.0);
    assert!(target.borrow().props.contains_key("spawned"));
}

/// Test that an entry may remove itself from inside its own on_update;
/// the write for that entry is skipped and the tick carries on
#[test]
fn test_mid_tick_self_removal() {
    let manager = AnimationManager::new();
    let target = shape();

    let handle_slot = Rc::new(RefCell::new(None));
    let slot = handle_slot.clone();
    let mgr = manager.clone();

    let suicidal = Tween::new(0.0, 100.0)
        .duration(100.0)
        .on_update(move |_| {
            if let Some(handle) = *slot.borrow() {
                mgr.remove(handle);
            }
        })
        .build()
        .unwrap();
    let handle = manager.add(suicidal, target.clone(), "gone");
    *handle_slot.borrow_mut() = Some(handle);
    manager.add(tween(0.0, 100.0, 100.0), target.clone(), "stays");

    manager.tick(50.0);

    assert_eq!(manager.active_count(), 1);
    assert!(!target.borrow().props.contains_key("gone"));
    assert_eq!(
        target.borrow().props.get("stays"),
        Some(&AnimValue::Number(50.0))
    );
}

/// Test that keyframe animations schedule through the same manager
#[test]
fn test_keyframe_animation_through_manager() {
    let manager = AnimationManager::new();
    let target = shape();

    let kf = KeyframeAnimation::new([
        Keyframe::new(0.0, 0.0),
        Keyframe::new(100.0, 10.0).with_easing(Easing::Linear),
        Keyframe::new(200.0, 50.0),
    ])
    .unwrap();
    manager.add(kf, target.clone(), "w");

    manager.tick(150.0);
    assert_eq!(
        target.borrow().props.get("w"),
        Some(&AnimValue::Number(30.0))
    );

    manager.tick(50.0);
    assert_eq!(manager.active_count(), 0);
    assert_eq!(
        target.borrow().props.get("w"),
        Some(&AnimValue::Number(50.0))
    );
}

/// Test that color tweens serialize cleanly through the target boundary
#[test]
fn test_color_write_back() {
    let manager = AnimationManager::new();
    let target = shape();
    let anim = Tween::color("#000", "#fff")
        .unwrap()
        .duration(100.0)
        .build()
        .unwrap();
    manager.add(anim, target.clone(), "fill");

    manager.tick(50.0);
    let value = target.borrow().props.get("fill").cloned().unwrap();
    assert_eq!(value, AnimValue::Color(Color::new(128, 128, 128)));
    assert_eq!(value.as_color().unwrap().to_string(), "#808080");
}

/// Test the global accessor returns one shared instance until reset
#[test]
fn test_global_accessor_and_reset() {
    AnimationManager::reset_global();

    let completions = Rc::new(RefCell::new(0u32));
    let seen = completions.clone();
    let target = shape();
    let anim = Tween::new(0.0, 1.0)
        .duration(100.0)
        .on_complete(move || *seen.borrow_mut() += 1)
        .build()
        .unwrap();

    AnimationManager::global().add(anim, target.clone(), "x");

    // A separate global() call observes the same instance
    assert_eq!(AnimationManager::global().active_count(), 1);

    // Reset discards registrations silently: no callbacks fire
    AnimationManager::reset_global();
    assert_eq!(AnimationManager::global().active_count(), 0);
    assert_eq!(*completions.borrow(), 0);

    // The fresh instance ticks independently of the discarded one
    AnimationManager::global().tick(100.0);
    assert!(!target.borrow().props.contains_key("x"));

    AnimationManager::reset_global();
}

/// Test determinism: identical delta sequences produce identical writes
#[test]
fn test_identical_delta_sequences_replay_identically() {
    let run = |deltas: &[f32]| -> Vec<AnimValue> {
        let manager = AnimationManager::new();
        let target = shape();
        let anim = Tween::new(0.0, 100.0)
            .duration(400.0)
            .easing(Easing::BounceOut)
            .build()
            .unwrap();
        manager.add(anim, target.clone(), "x");

        let mut written = Vec::new();
        for delta in deltas {
            manager.tick(*delta);
            written.push(target.borrow().props["x"].clone());
        }
        written
    };

    let deltas = [16.0, 16.0, 33.0, 8.0, 100.0, 16.0];
    assert_eq!(run(&deltas), run(&deltas));
}
