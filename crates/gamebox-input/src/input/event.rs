/// Raw key code as reported by the platform (virtual key code).
pub type KeyCode = u32;

/// Event kinds the tracker knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    TouchStart,
    TouchEnd,
    TouchMove,
    MouseDown,
    PickerClick,
}

/// A key transition delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    /// Produced by the tracker itself (e.g. while resetting keys) rather than
    /// by the platform. Handled exactly like a platform event.
    pub synthetic: bool,
}

impl KeyEvent {
    /// Create a key event delivered by the platform.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            synthetic: false,
        }
    }

    /// Create a key event generated by the tracker.
    pub fn synthetic(code: KeyCode) -> Self {
        Self {
            code,
            synthetic: true,
        }
    }
}

/// A single touch contact point in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchPoint {
    pub page_x: f64,
    pub page_y: f64,
}

/// Platform input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    TouchStart { touches: Vec<TouchPoint> },
    TouchEnd,
    TouchMove,
    MouseDown { page_x: f64, page_y: f64 },
    PickerClick,
}

impl InputEvent {
    /// Get the kind of listener this event is delivered through.
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::KeyDown(_) => EventKind::KeyDown,
            InputEvent::KeyUp(_) => EventKind::KeyUp,
            InputEvent::TouchStart { .. } => EventKind::TouchStart,
            InputEvent::TouchEnd => EventKind::TouchEnd,
            InputEvent::TouchMove => EventKind::TouchMove,
            InputEvent::MouseDown { .. } => EventKind::MouseDown,
            InputEvent::PickerClick => EventKind::PickerClick,
        }
    }
}

/// What the host should do with the platform event after the tracker saw it.
///
/// The host applies each request only when its event object supports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventOutcome {
    /// Let the platform handle the event normally.
    pub fn pass() -> Self {
        Self::default()
    }

    /// Suppress the default action only.
    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: false,
        }
    }

    /// Suppress the default action and stop the event from bubbling.
    pub fn consume() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }
}
