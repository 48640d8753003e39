use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Pointer position and button state as reported by the window system.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

/// Pointer state tracked across polls, remembering when a button went down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub state: PointerState,
    pressed_since: Option<Instant>,
}

impl Pointer {
    /// Store a fresh poll result. Returns true if a button was released.
    pub fn update(&mut self, state: PointerState, now: Instant) -> bool {
        let released = self.state.pressed && !state.pressed;
        match (self.state.pressed, state.pressed) {
            (false, true) => self.pressed_since = Some(now),
            (_, false) => self.pressed_since = None,
            _ => {}
        }
        self.state = state;
        released
    }

    #[must_use]
    pub const fn pressed(&self) -> bool {
        self.state.pressed
    }

    /// True once a button has been held for at least `threshold`.
    #[must_use]
    pub fn held_for(&self, threshold: Duration, now: Instant) -> bool {
        self.pressed_since
            .is_some_and(|since| now.saturating_duration_since(since) >= threshold)
    }
}
