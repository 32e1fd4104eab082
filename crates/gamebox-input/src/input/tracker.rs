use tracing::{debug, trace};

use crate::config::InputConfig;
use crate::input::event::{EventKind, EventOutcome, InputEvent, KeyCode, KeyEvent};
use crate::input::key_state::{HIT, KeyStateTable, RELEASED};
use crate::input::keymap::{Button, Keymap};
use crate::input::picker::KeyboardPicker;
use crate::input::touch::FocusAdapter;
use crate::traits::audio::AudioMixer;
use crate::traits::gamebox::{GameLoop, Viewport};
use crate::traits::host::{EventTarget, PickerContainer};

/// Runtime services the tracker forwards requests to while handling events.
pub struct Collaborators<'a> {
    pub game: &'a mut dyn GameLoop,
    pub audio: &'a mut dyn AudioMixer,
    pub viewport: &'a mut dyn Viewport,
}

/// Keyboard and touch input state for one game session.
///
/// Owned by the runtime context. Per frame the caller runs the queries first,
/// then [`InputTracker::advance_frame`], then delivers the next batch of events.
#[derive(Debug, Clone)]
pub struct InputTracker {
    keys: KeyStateTable,
    keymap: Keymap,
    /// Local copy of the audio subsystem's total-mute flag.
    muted: bool,
    focus: FocusAdapter,
}

impl InputTracker {
    /// Create a tracker with the default keymap and picker settings.
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create a tracker using the keymap and picker settings from `config`.
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            keys: KeyStateTable::new(),
            keymap: config.keymap,
            muted: false,
            focus: FocusAdapter::new(config.picker),
        }
    }

    /// Get the keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Get the raw key state table.
    pub fn keys(&self) -> &KeyStateTable {
        &self.keys
    }

    /// Check the cached total-mute flag.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Resync the cached mute flag after the audio subsystem changed it.
    pub fn sync_mute_flag(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn picker(&self) -> Option<&KeyboardPicker> {
        self.focus.picker()
    }

    /// Register the key-down and key-up listeners on `target`.
    pub fn add_key_listener_to(&self, target: &mut impl EventTarget) {
        target.listen(EventKind::KeyDown);
        target.listen(EventKind::KeyUp);
    }

    /// Register the touch and mouse listeners on `target`.
    pub fn add_touch_events_to(&self, target: &mut impl EventTarget) {
        target.listen(EventKind::TouchStart);
        target.listen(EventKind::MouseDown);
        target.listen(EventKind::TouchEnd);
        target.listen(EventKind::TouchMove);
    }

    /// Create the hidden keyboard picker, install it into `container` and
    /// listen for clicks on it.
    pub fn focus_driven_keyboard_support(&mut self, container: &mut impl PickerContainer) {
        self.focus.install(container);
    }

    /// Route a platform event to its handler.
    pub fn dispatch(&mut self, event: &InputEvent, ctx: &mut Collaborators<'_>) -> EventOutcome {
        trace!(kind = ?event.kind(), "dispatch");
        match event {
            InputEvent::KeyDown(key) => self.on_key_down(*key),
            InputEvent::KeyUp(key) => self.on_key_up(*key, ctx.game, ctx.audio),
            InputEvent::TouchStart { touches } => {
                self.focus.on_touch_start(touches, ctx.viewport)
            }
            InputEvent::MouseDown { page_y, .. } => {
                self.focus.on_pointer_down(*page_y, ctx.viewport)
            }
            InputEvent::TouchEnd => self.focus.on_touch_end(),
            InputEvent::TouchMove => self.focus.on_touch_move(),
            InputEvent::PickerClick => self.focus.on_picker_click(),
        }
    }

    /// Key pressed. Repeats while the key stays down are ignored.
    pub fn on_key_down(&mut self, event: KeyEvent) -> EventOutcome {
        if self.keys.press(event.code) {
            trace!(code = event.code, "key down");
        }
        EventOutcome::prevent_default()
    }

    /// Key released. Releasing the pause or mute key also drives the game
    /// loop or the audio subsystem.
    pub fn on_key_up(
        &mut self,
        event: KeyEvent,
        game: &mut dyn GameLoop,
        audio: &mut dyn AudioMixer,
    ) -> EventOutcome {
        self.keys.release(event.code);
        trace!(code = event.code, synthetic = event.synthetic, "key up");

        if self.is_bound(Button::Pause, event.code) {
            debug!("pause key released");
            game.pause_game();
        }
        if self.is_bound(Button::Mute, event.code) {
            self.toggle_mute(audio);
        }
        EventOutcome::prevent_default()
    }

    fn is_bound(&self, button: Button, code: KeyCode) -> bool {
        self.keymap.code_of(button) == Some(code)
    }

    fn toggle_mute(&mut self, audio: &mut dyn AudioMixer) {
        if self.muted {
            audio.total_audio_unmute();
            self.muted = false;
            debug!("audio unmuted");
        } else {
            audio.total_audio_mute();
            self.muted = true;
            debug!("audio muted");
        }
    }

    /// Send a synthetic key-up for every mapped key. The pause and mute keys
    /// are included, so a reset pauses once and toggles mute once.
    pub fn reset_keys(&mut self, game: &mut dyn GameLoop, audio: &mut dyn AudioMixer) {
        let codes: Vec<KeyCode> = self.keymap.codes().collect();
        for code in codes {
            self.on_key_up(KeyEvent::synthetic(code), game, audio);
        }
    }

    /// Advance one frame: held keys count up towards "hold", released keys
    /// return to idle.
    pub fn advance_frame(&mut self) {
        self.keys.advance_frame();
    }

    fn state(&self, name: &str) -> Option<i32> {
        self.keymap.code(name).map(|code| self.keys.get(code))
    }

    /// True only on the frame the key went down.
    pub fn key_is_hit(&self, name: &str) -> bool {
        self.state(name) == Some(HIT)
    }

    /// True while the key is down.
    pub fn key_is_pressed(&self, name: &str) -> bool {
        self.state(name).is_some_and(|s| s > 0)
    }

    /// True once the key has stayed down past its first frame.
    pub fn key_is_hold(&self, name: &str) -> bool {
        self.state(name).is_some_and(|s| s > HIT)
    }

    /// True only on the frame the key went up.
    pub fn key_is_released(&self, name: &str) -> bool {
        self.state(name) == Some(RELEASED)
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}
