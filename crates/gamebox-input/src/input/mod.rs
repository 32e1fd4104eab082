//! Keyboard and touch input handling.
//!
//! This module provides:
//! - [`InputTracker`]: Per-frame key transition queries and event dispatch
//! - [`Keymap`]: Logical button names to raw key codes
//! - [`KeyStateTable`]: Raw key code to frame-relative state
//! - [`KeyboardPicker`]: Focus overlay for touch devices

pub mod event;
mod key_state;
mod keymap;
mod picker;
mod touch;
mod tracker;

pub use event::{EventKind, EventOutcome, InputEvent, KeyCode, KeyEvent, TouchPoint};
pub use key_state::{HIT, IDLE, KeyStateTable, RELEASED};
pub use keymap::{Button, Keymap};
pub use picker::{KeyboardPicker, PickerStyle};
pub use touch::FocusAdapter;
pub use tracker::{Collaborators, InputTracker};
