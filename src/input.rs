/// Held-key tracking.
///
/// The host feeds raw key events in; the update step reads a `Copy`
/// snapshot once per frame.  Nothing here ever touches entity state.

use std::collections::HashMap;

use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::MoveLeft, Control::MoveRight, Control::Fire];

    /// Translate a raw key into a control.  `None` for keys the game ignores.
    pub fn from_key(code: KeyCode) -> Option<Control> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::MoveRight),
            KeyCode::Char(' ') => Some(Control::Fire),
            _ => None,
        }
    }
}

/// Which controls are currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputTracker {
    left: bool,
    right: bool,
    fire: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        InputTracker::default()
    }

    pub fn set_held(&mut self, control: Control, held: bool) {
        match control {
            Control::MoveLeft => self.left = held,
            Control::MoveRight => self.right = held,
            Control::Fire => self.fire = held,
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::MoveLeft => self.left,
            Control::MoveRight => self.right,
            Control::Fire => self.fire,
        }
    }

    /// Raw-key entry point; unrecognised keys are silently dropped.
    pub fn set_key(&mut self, code: KeyCode, held: bool) {
        if let Some(control) = Control::from_key(code) {
            self.set_held(control, held);
        }
    }

    /// Consistent view for one frame.
    pub fn snapshot(&self) -> InputTracker {
        *self
    }
}

// ── Hold window ──────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events.
/// Once auto-repeat is running (≥ 15 Hz) a window of 8 frames (≈128 ms at
/// 60 FPS) is refreshed before it lapses.  The OS's initial repeat delay
/// (≈250-600 ms) is longer, so on those terminals a held key acts for one
/// window, pauses until repeats begin, then stays held.
pub const HOLD_WINDOW: u64 = 8;

/// True if any key bound to `control` was seen within the last
/// `HOLD_WINDOW` frames.  `key_frame` maps each key to the frame of its
/// last press or repeat.
pub fn held_within(key_frame: &HashMap<KeyCode, u64>, control: Control, frame: u64) -> bool {
    key_frame.iter().any(|(code, &last)| {
        Control::from_key(*code) == Some(control) && frame.saturating_sub(last) <= HOLD_WINDOW
    })
}
