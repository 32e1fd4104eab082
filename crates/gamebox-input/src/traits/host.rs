use crate::input::{EventKind, KeyboardPicker};

/// Something the host can attach input listeners to (a window, a canvas).
pub trait EventTarget {
    /// Start forwarding events of `kind` to the tracker's dispatcher.
    fn listen(&mut self, kind: EventKind);
}

/// Host element that can display the keyboard picker overlay. Listeners
/// registered on it are bound to the appended picker.
pub trait PickerContainer: EventTarget {
    fn append_picker(&mut self, picker: &KeyboardPicker);
}
