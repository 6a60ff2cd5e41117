use std::collections::HashMap;

use crossterm::event::KeyCode;
use star_shooter::input::{held_within, Control, InputTracker, HOLD_WINDOW};

#[test]
fn nothing_held_initially() {
    let input = InputTracker::new();
    for control in Control::ALL {
        assert!(!input.is_held(control));
    }
}

#[test]
fn set_held_toggles_only_that_control() {
    let mut input = InputTracker::new();
    input.set_held(Control::Fire, true);
    assert!(input.is_held(Control::Fire));
    assert!(!input.is_held(Control::MoveLeft));
    assert!(!input.is_held(Control::MoveRight));

    input.set_held(Control::Fire, false);
    assert!(!input.is_held(Control::Fire));
}

#[test]
fn arrows_and_letters_map_to_movement() {
    assert_eq!(Control::from_key(KeyCode::Left), Some(Control::MoveLeft));
    assert_eq!(Control::from_key(KeyCode::Char('a')), Some(Control::MoveLeft));
    assert_eq!(Control::from_key(KeyCode::Char('A')), Some(Control::MoveLeft));
    assert_eq!(Control::from_key(KeyCode::Right), Some(Control::MoveRight));
    assert_eq!(Control::from_key(KeyCode::Char('d')), Some(Control::MoveRight));
    assert_eq!(Control::from_key(KeyCode::Char('D')), Some(Control::MoveRight));
    assert_eq!(Control::from_key(KeyCode::Char(' ')), Some(Control::Fire));
}

#[test]
fn unknown_keys_are_ignored() {
    let mut input = InputTracker::new();
    input.set_key(KeyCode::Char('x'), true);
    input.set_key(KeyCode::Up, true);
    input.set_key(KeyCode::Enter, true);
    assert_eq!(input, InputTracker::new());
}

#[test]
fn set_key_press_and_release() {
    let mut input = InputTracker::new();
    input.set_key(KeyCode::Left, true);
    input.set_key(KeyCode::Char(' '), true);
    assert!(input.is_held(Control::MoveLeft));
    assert!(input.is_held(Control::Fire));

    input.set_key(KeyCode::Left, false);
    assert!(!input.is_held(Control::MoveLeft));
    assert!(input.is_held(Control::Fire));
}

#[test]
fn snapshot_is_unaffected_by_later_events() {
    let mut input = InputTracker::new();
    input.set_held(Control::MoveRight, true);
    let snap = input.snapshot();
    input.set_held(Control::MoveRight, false);
    assert!(snap.is_held(Control::MoveRight));
    assert!(!input.is_held(Control::MoveRight));
}

// ── hold window ───────────────────────────────────────────────────────────────

#[test]
fn press_stays_held_for_the_window_then_lapses() {
    let mut key_frame = HashMap::new();
    key_frame.insert(KeyCode::Left, 100);
    assert!(held_within(&key_frame, Control::MoveLeft, 100));
    assert!(held_within(&key_frame, Control::MoveLeft, 100 + HOLD_WINDOW));
    assert!(!held_within(&key_frame, Control::MoveLeft, 101 + HOLD_WINDOW));
}

#[test]
fn first_press_lapses_before_a_slow_repeat_delay() {
    // Press at frame 0, first auto-repeat ~250 ms later (frame 15 at 60 FPS).
    let mut key_frame = HashMap::new();
    key_frame.insert(KeyCode::Char(' '), 0);
    let gap: Vec<u64> = (0..15)
        .filter(|&f| !held_within(&key_frame, Control::Fire, f))
        .collect();
    assert_eq!(gap.first(), Some(&(HOLD_WINDOW + 1)));

    key_frame.insert(KeyCode::Char(' '), 15);
    assert!(held_within(&key_frame, Control::Fire, 15));
}

#[test]
fn any_bound_key_keeps_the_control_held() {
    let mut key_frame = HashMap::new();
    key_frame.insert(KeyCode::Right, 0);
    key_frame.insert(KeyCode::Char('d'), 20);
    assert!(held_within(&key_frame, Control::MoveRight, 25));
    assert!(!held_within(&key_frame, Control::MoveLeft, 25));
}
