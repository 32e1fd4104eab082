//! Integration tests for the input tracker driven through `dispatch`.

use gamebox_input::input::{Button, EventKind, KeyboardPicker, TouchPoint};
use gamebox_input::traits::audio::AudioMixer;
use gamebox_input::traits::gamebox::{GameLoop, ScreenRect, Viewport};
use gamebox_input::traits::host::{EventTarget, PickerContainer};
use gamebox_input::{Collaborators, EventOutcome, InputConfig, InputEvent, InputTracker, KeyEvent};
use proptest::prelude::*;
use tempfile::tempdir;

#[derive(Default)]
struct Runtime {
    pauses: usize,
    audio_calls: Vec<&'static str>,
    screen: ScreenRect,
}

struct Game<'a>(&'a mut usize);
struct Audio<'a>(&'a mut Vec<&'static str>);
struct Screen(ScreenRect);

impl GameLoop for Game<'_> {
    fn pause_game(&mut self) {
        *self.0 += 1;
    }
}

impl AudioMixer for Audio<'_> {
    fn total_audio_mute(&mut self) {
        self.0.push("mute");
    }

    fn total_audio_unmute(&mut self) {
        self.0.push("unmute");
    }
}

impl Viewport for Screen {
    fn absolute_position(&mut self) -> ScreenRect {
        self.0
    }
}

impl Runtime {
    fn send(&mut self, tracker: &mut InputTracker, event: InputEvent) -> EventOutcome {
        let mut game = Game(&mut self.pauses);
        let mut audio = Audio(&mut self.audio_calls);
        let mut screen = Screen(self.screen);
        let mut ctx = Collaborators {
            game: &mut game,
            audio: &mut audio,
            viewport: &mut screen,
        };
        tracker.dispatch(&event, &mut ctx)
    }
}

#[derive(Default)]
struct Page {
    listeners: Vec<EventKind>,
    pickers: Vec<KeyboardPicker>,
}

impl EventTarget for Page {
    fn listen(&mut self, kind: EventKind) {
        self.listeners.push(kind);
    }
}

impl PickerContainer for Page {
    fn append_picker(&mut self, picker: &KeyboardPicker) {
        self.pickers.push(picker.clone());
    }
}

fn down(code: u32) -> InputEvent {
    InputEvent::KeyDown(KeyEvent::new(code))
}

fn up(code: u32) -> InputEvent {
    InputEvent::KeyUp(KeyEvent::new(code))
}

/// Test a full press/hold/release cycle across frames.
#[test]
fn test_frame_cycle() {
    let mut tracker = InputTracker::new();
    let mut runtime = Runtime::default();
    let a = tracker.keymap().code_of(Button::A).unwrap();

    runtime.send(&mut tracker, down(a));
    assert!(tracker.key_is_hit("a"));
    tracker.advance_frame();

    runtime.send(&mut tracker, down(a));
    assert!(tracker.key_is_hold("a"));
    assert!(!tracker.key_is_hit("a"));
    tracker.advance_frame();

    runtime.send(&mut tracker, up(a));
    assert!(tracker.key_is_released("a"));
    assert!(!tracker.key_is_pressed("a"));
    tracker.advance_frame();

    assert!(!tracker.key_is_released("a"));
    assert!(tracker.keys().is_empty());
}

/// Test that key events always ask the host to suppress the default action.
#[test]
fn test_key_events_prevent_default() {
    let mut tracker = InputTracker::new();
    let mut runtime = Runtime::default();

    assert_eq!(runtime.send(&mut tracker, down(13)), EventOutcome::prevent_default());
    assert_eq!(runtime.send(&mut tracker, up(13)), EventOutcome::prevent_default());
}

/// Test that a key reset fires the pause and mute actions once each.
#[test]
fn test_reset_fires_global_actions() {
    let mut tracker = InputTracker::new();
    let mut runtime = Runtime::default();
    runtime.send(&mut tracker, down(38));

    let mut game = Game(&mut runtime.pauses);
    let mut audio = Audio(&mut runtime.audio_calls);
    tracker.reset_keys(&mut game, &mut audio);

    assert_eq!(runtime.pauses, 1);
    assert_eq!(runtime.audio_calls, vec!["mute"]);
    assert!(tracker.key_is_released("up"));
    assert!(tracker.is_muted());
}

/// Test the pause and mute side effects of key releases.
#[test]
fn test_global_action_keys() {
    let mut tracker = InputTracker::new();
    let mut runtime = Runtime::default();

    runtime.send(&mut tracker, up(80));
    assert_eq!(runtime.pauses, 1);

    for _ in 0..3 {
        runtime.send(&mut tracker, up(77));
    }
    assert_eq!(runtime.audio_calls, vec!["mute", "unmute", "mute"]);
    assert_eq!(runtime.pauses, 1);
}

/// Test that touch near the top of the viewport opens the picker.
#[test]
fn test_touch_opens_and_closes_picker() {
    let mut tracker = InputTracker::new();
    let mut page = Page::default();
    tracker.add_key_listener_to(&mut page);
    tracker.add_touch_events_to(&mut page);
    tracker.focus_driven_keyboard_support(&mut page);
    assert_eq!(page.listeners.len(), 7);
    assert_eq!(page.listeners.last(), Some(&EventKind::PickerClick));
    assert_eq!(page.pickers.len(), 1);

    let mut runtime = Runtime {
        screen: ScreenRect::new(40.0, 200.0, 640.0, 480.0),
        ..Runtime::default()
    };

    let touch = |page_y| InputEvent::TouchStart {
        touches: vec![TouchPoint { page_x: 0.0, page_y }],
    };

    assert_eq!(runtime.send(&mut tracker, touch(210.0)), EventOutcome::pass());
    let picker = tracker.picker().unwrap();
    assert!(picker.is_visible());
    assert_eq!(picker.style().left, 45.0);
    assert_eq!(picker.style().top, 205.0);
    assert_eq!(picker.style().width, 630.0);

    assert_eq!(runtime.send(&mut tracker, touch(250.0)), EventOutcome::consume());
    assert!(!tracker.picker().unwrap().is_visible());

    runtime.send(&mut tracker, touch(210.0));
    assert_eq!(
        runtime.send(&mut tracker, InputEvent::PickerClick),
        EventOutcome::consume()
    );
    assert!(!tracker.picker().unwrap().is_visible());
}

/// Test that a tracker built from a saved config uses its keymap.
#[test]
fn test_tracker_from_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.json");
    std::fs::write(&path, r#"{ "keymap": { "a": 32 }, "picker": { "threshold_px": 60 } }"#)
        .unwrap();

    let config = InputConfig::load_from(&path).unwrap();
    let mut tracker = InputTracker::with_config(config);
    let mut runtime = Runtime::default();

    runtime.send(&mut tracker, down(32));
    assert!(tracker.key_is_hit("a"));
    runtime.send(&mut tracker, down(38));
    assert!(tracker.key_is_hit("up"));

    let outcome = runtime.send(
        &mut tracker,
        InputEvent::MouseDown {
            page_x: 0.0,
            page_y: 50.0,
        },
    );
    assert_eq!(outcome, EventOutcome::pass());
}

fn key_event() -> impl Strategy<Value = InputEvent> {
    let code = prop::sample::select(vec![37u32, 38, 39, 40, 67, 88, 90, 13]);
    (code, any::<bool>()).prop_map(|(code, pressed)| if pressed { down(code) } else { up(code) })
}

proptest! {
    /// The mute key alternates mute and unmute starting from unmuted.
    #[test]
    fn prop_mute_alternates(releases in 1usize..20) {
        let mut tracker = InputTracker::new();
        let mut runtime = Runtime::default();
        for _ in 0..releases {
            runtime.send(&mut tracker, up(77));
        }

        prop_assert_eq!(runtime.audio_calls.len(), releases);
        for (i, call) in runtime.audio_calls.iter().enumerate() {
            prop_assert_eq!(*call, if i % 2 == 0 { "mute" } else { "unmute" });
        }
        prop_assert_eq!(tracker.is_muted(), releases % 2 == 1);
    }

    /// Queries stay mutually consistent and reset releases every button.
    #[test]
    fn prop_queries_consistent(frames in prop::collection::vec(prop::collection::vec(key_event(), 0..6), 1..10)) {
        let mut tracker = InputTracker::new();
        let mut runtime = Runtime::default();

        for batch in frames {
            for event in batch {
                runtime.send(&mut tracker, event);
            }
            for button in Button::all() {
                let name = button.name();
                if tracker.key_is_hit(name) || tracker.key_is_hold(name) {
                    prop_assert!(tracker.key_is_pressed(name));
                }
                if tracker.key_is_released(name) {
                    prop_assert!(!tracker.key_is_pressed(name));
                }
                prop_assert!(!(tracker.key_is_hit(name) && tracker.key_is_hold(name)));
            }
            tracker.advance_frame();
        }

        let pauses = runtime.pauses;
        let mute_calls = runtime.audio_calls.len();
        let mut game = Game(&mut runtime.pauses);
        let mut audio = Audio(&mut runtime.audio_calls);
        tracker.reset_keys(&mut game, &mut audio);
        for button in Button::all() {
            prop_assert!(tracker.key_is_released(button.name()));
        }
        prop_assert_eq!(runtime.pauses, pauses + 1);
        prop_assert_eq!(runtime.audio_calls.len(), mute_calls + 1);
        prop_assert!(!tracker.key_is_pressed("select"));
    }
}
