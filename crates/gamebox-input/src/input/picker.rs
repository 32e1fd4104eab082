use crate::config::PickerConfig;
use crate::traits::gamebox::ScreenRect;

/// Inline style of the picker overlay. Lengths are CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyle {
    pub position: &'static str,
    pub z_index: i32,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub border: String,
    pub padding: f64,
    pub margin: f64,
    pub text_align: &'static str,
    pub background_color: &'static str,
    pub color: &'static str,
    pub cursor: &'static str,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            position: "absolute",
            z_index: 100,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            border: "0px".to_string(),
            padding: 0.0,
            margin: 0.0,
            text_align: "center",
            background_color: "#000000",
            color: "#fefefe",
            cursor: "pointer",
        }
    }
}

/// Overlay text input used to pull up the virtual keyboard on touch devices
/// that will not focus the game screen programmatically.
///
/// Created once and never removed; hiding collapses it to a 0x0 read-only box.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardPicker {
    config: PickerConfig,
    style: PickerStyle,
    value: String,
    read_only: bool,
    visible: bool,
}

impl KeyboardPicker {
    /// Create the picker in its hidden state.
    pub fn new(config: PickerConfig) -> Self {
        let mut picker = Self {
            config,
            style: PickerStyle::default(),
            value: String::new(),
            read_only: true,
            visible: true,
        };
        picker.hide();
        picker
    }

    /// Stretch the picker across the top strip of the viewport and make it
    /// editable, showing the prompt label.
    pub fn show(&mut self, viewport: ScreenRect) {
        let inset = self.config.inset_px;
        self.value = self.config.label.clone();
        self.style.left = viewport.x + inset;
        self.style.top = viewport.y + inset;
        self.style.width = viewport.w - inset * 2.0;
        self.style.height = self.config.height_px;
        self.style.border = "1px dashed white".to_string();
        self.read_only = false;
        self.visible = true;
    }

    /// Collapse the picker to an empty read-only box at the page origin.
    pub fn hide(&mut self) {
        self.style = PickerStyle::default();
        self.value.clear();
        self.read_only = true;
        self.visible = false;
    }

    /// Check if the picker is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Text currently shown inside the picker.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the current inline style.
    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    /// Render the style as an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        let s = &self.style;
        format!(
            "position: {}; z-index: {}; left: {}px; top: {}px; width: {}px; height: {}px; \
             border: {}; padding: {}px; margin: {}px; text-align: {}; \
             background-color: {}; color: {}; cursor: {};",
            s.position,
            s.z_index,
            s.left,
            s.top,
            s.width,
            s.height,
            s.border,
            s.padding,
            s.margin,
            s.text_align,
            s.background_color,
            s.color,
            s.cursor,
        )
    }
}

impl Default for KeyboardPicker {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}
