mod input_config;

pub use input_config::{InputConfig, PickerConfig};
