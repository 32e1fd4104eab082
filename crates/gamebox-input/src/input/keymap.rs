use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::event::KeyCode;

/// Logical buttons of the arcade-style control layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Right,
    Left,
    A,
    B,
    C,
    Pause,
    Mute,
}

impl Button {
    /// Every standard button, in keymap order.
    pub fn all() -> &'static [Button] {
        &[
            Button::Up,
            Button::Down,
            Button::Right,
            Button::Left,
            Button::A,
            Button::B,
            Button::C,
            Button::Pause,
            Button::Mute,
        ]
    }

    /// Name used in the keymap and by the query API.
    pub fn name(self) -> &'static str {
        match self {
            Button::Up => "up",
            Button::Down => "down",
            Button::Right => "right",
            Button::Left => "left",
            Button::A => "a",
            Button::B => "b",
            Button::C => "c",
            Button::Pause => "pause",
            Button::Mute => "mute",
        }
    }

    /// Default virtual key code: arrows, z/x/c for A/B/C, p and m.
    pub fn default_code(self) -> KeyCode {
        match self {
            Button::Up => 38,
            Button::Down => 40,
            Button::Right => 39,
            Button::Left => 37,
            Button::A => 90,
            Button::B => 88,
            Button::C => 67,
            Button::Pause => 80,
            Button::Mute => 77,
        }
    }
}

/// Logical button name to raw key code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keymap(BTreeMap<String, KeyCode>);

impl Default for Keymap {
    fn default() -> Self {
        Self(
            Button::all()
                .iter()
                .map(|b| (b.name().to_string(), b.default_code()))
                .collect(),
        )
    }
}

impl Keymap {
    /// Keymap with no bindings at all.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Bind `name` to `code`, replacing any previous binding for the name.
    pub fn with_binding(mut self, name: impl Into<String>, code: KeyCode) -> Self {
        self.0.insert(name.into(), code);
        self
    }

    /// Raw code for a logical name, if mapped.
    pub fn code(&self, name: &str) -> Option<KeyCode> {
        self.0.get(name).copied()
    }

    /// Raw code for a standard button, if mapped.
    pub fn code_of(&self, button: Button) -> Option<KeyCode> {
        self.code(button.name())
    }

    /// Every raw code in the map, in name order.
    pub fn codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.0.values().copied()
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no name is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fill in default bindings for any standard button the map lacks.
    pub fn normalize(&mut self) {
        for button in Button::all() {
            self.0
                .entry(button.name().to_string())
                .or_insert_with(|| button.default_code());
        }
    }
}
