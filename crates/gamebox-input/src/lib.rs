pub mod config;
pub mod input;
pub mod traits;
pub mod util;

#[cfg(test)]
mod test_utils;

pub use config::{InputConfig, PickerConfig};
pub use input::{Collaborators, EventOutcome, InputEvent, InputTracker, KeyEvent};
