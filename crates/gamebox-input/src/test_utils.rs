//! Test utilities: recording stand-ins for the runtime collaborators.

#[cfg(test)]
pub mod mocks {
    use crate::input::{EventKind, KeyboardPicker};
    use crate::traits::audio::AudioMixer;
    use crate::traits::gamebox::{GameLoop, ScreenRect, Viewport};
    use crate::traits::host::{EventTarget, PickerContainer};

    /// Counts pause requests.
    #[derive(Debug, Default)]
    pub struct MockGameLoop {
        pub pauses: usize,
    }

    impl GameLoop for MockGameLoop {
        fn pause_game(&mut self) {
            self.pauses += 1;
        }
    }

    /// Records mute/unmute calls in order.
    #[derive(Debug, Default)]
    pub struct MockAudio {
        pub calls: Vec<&'static str>,
    }

    impl AudioMixer for MockAudio {
        fn total_audio_mute(&mut self) {
            self.calls.push("mute");
        }

        fn total_audio_unmute(&mut self) {
            self.calls.push("unmute");
        }
    }

    /// Fixed viewport that counts position queries.
    #[derive(Debug, Default)]
    pub struct MockViewport {
        pub rect: ScreenRect,
        pub queries: usize,
    }

    impl MockViewport {
        pub fn new(rect: ScreenRect) -> Self {
            Self { rect, queries: 0 }
        }
    }

    impl Viewport for MockViewport {
        fn absolute_position(&mut self) -> ScreenRect {
            self.queries += 1;
            self.rect
        }
    }

    #[derive(Debug, Default)]
    pub struct MockTarget {
        pub kinds: Vec<EventKind>,
    }

    impl EventTarget for MockTarget {
        fn listen(&mut self, kind: EventKind) {
            self.kinds.push(kind);
        }
    }

    #[derive(Debug, Default)]
    pub struct MockContainer {
        pub appended: Vec<KeyboardPicker>,
        pub kinds: Vec<EventKind>,
    }

    impl EventTarget for MockContainer {
        fn listen(&mut self, kind: EventKind) {
            self.kinds.push(kind);
        }
    }

    impl PickerContainer for MockContainer {
        fn append_picker(&mut self, picker: &KeyboardPicker) {
            self.appended.push(picker.clone());
        }
    }
}
