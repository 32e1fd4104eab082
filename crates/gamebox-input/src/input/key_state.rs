use std::collections::HashMap;

use crate::input::event::KeyCode;

/// State value for a key pressed during the current frame.
pub const HIT: i32 = 1;
/// State value for a key released during the current frame.
pub const RELEASED: i32 = -1;
/// State value for a key with no recorded activity.
pub const IDLE: i32 = 0;

/// Raw key code to frame-relative state.
///
/// `1` = just pressed, `>1` = held, `-1` = just released, absent = idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStateTable {
    states: HashMap<KeyCode, i32>,
}

impl KeyStateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `code`. Unknown codes are idle.
    pub fn get(&self, code: KeyCode) -> i32 {
        self.states.get(&code).copied().unwrap_or(IDLE)
    }

    /// Record a key-down. Only an idle key becomes hit; a held or
    /// just-released key keeps its state until the next frame advance.
    ///
    /// Returns true if the state changed.
    pub fn press(&mut self, code: KeyCode) -> bool {
        if self.get(code) != IDLE {
            return false;
        }
        self.states.insert(code, HIT);
        true
    }

    /// Record a key-up, overwriting whatever state the key had.
    pub fn release(&mut self, code: KeyCode) {
        self.states.insert(code, RELEASED);
    }

    /// Age every entry by one frame: held keys count up, released keys go idle.
    pub fn advance_frame(&mut self) {
        self.states.retain(|_, state| {
            if *state > IDLE {
                *state = state.saturating_add(1);
                true
            } else {
                false
            }
        });
    }

    /// Number of keys with a non-idle state.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if every key is idle.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
