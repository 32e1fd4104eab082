use tracing::debug;

use crate::config::PickerConfig;
use crate::input::event::{EventKind, EventOutcome, TouchPoint};
use crate::input::picker::KeyboardPicker;
use crate::traits::gamebox::{ScreenRect, Viewport};
use crate::traits::host::PickerContainer;

/// Bridges touch and mouse gestures to the keyboard picker.
#[derive(Debug, Clone)]
pub struct FocusAdapter {
    config: PickerConfig,
    picker: Option<KeyboardPicker>,
    /// Viewport placement measured on the last pointer-down.
    screen: ScreenRect,
}

impl FocusAdapter {
    /// Create an adapter with no picker installed yet.
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            picker: None,
            screen: ScreenRect::default(),
        }
    }

    /// Create the hidden picker, hand it to `container` and register the
    /// click listener that dismisses it. Installing twice keeps the first picker.
    pub fn install(&mut self, container: &mut impl PickerContainer) {
        let picker = self
            .picker
            .get_or_insert_with(|| KeyboardPicker::new(self.config.clone()));
        container.append_picker(picker);
        container.listen(EventKind::PickerClick);
    }

    /// Get the picker, if installed.
    pub fn picker(&self) -> Option<&KeyboardPicker> {
        self.picker.as_ref()
    }

    /// Show the picker over the last measured viewport.
    pub fn show_picker(&mut self) {
        let screen = self.screen;
        if let Some(picker) = self.picker.as_mut() {
            picker.show(screen);
            debug!(x = screen.x, y = screen.y, "keyboard picker shown");
        }
    }

    /// Collapse the picker.
    pub fn hide_picker(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            if picker.is_visible() {
                debug!("keyboard picker hidden");
            }
            picker.hide();
        }
    }

    /// Pointer pressed at `page_y`. A press in the top strip of the viewport
    /// opens the picker; anywhere else closes it and swallows the gesture so
    /// the page does not scroll or zoom.
    pub fn on_pointer_down(&mut self, page_y: f64, viewport: &mut dyn Viewport) -> EventOutcome {
        self.screen = viewport.absolute_position();
        if page_y - self.screen.y < self.config.threshold_px {
            self.show_picker();
            EventOutcome::pass()
        } else {
            self.hide_picker();
            EventOutcome::consume()
        }
    }

    /// Touch-start uses the first contact point. A touch list with no points
    /// carries no position and is left to the platform.
    pub fn on_touch_start(
        &mut self,
        touches: &[TouchPoint],
        viewport: &mut dyn Viewport,
    ) -> EventOutcome {
        match touches.first() {
            Some(touch) => self.on_pointer_down(touch.page_y, viewport),
            None => EventOutcome::pass(),
        }
    }

    /// Swallow touch-end so the page does not react to the gesture.
    pub fn on_touch_end(&mut self) -> EventOutcome {
        EventOutcome::consume()
    }

    /// Swallow touch-move so the page does not scroll.
    pub fn on_touch_move(&mut self) -> EventOutcome {
        EventOutcome::consume()
    }

    /// Clicking the picker itself dismisses it.
    pub fn on_picker_click(&mut self) -> EventOutcome {
        self.hide_picker();
        EventOutcome::consume()
    }
}

impl Default for FocusAdapter {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}
