/// Absolute on-screen rectangle of the game viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ScreenRect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Game loop orchestration reachable from the input layer.
pub trait GameLoop {
    /// Toggle the paused state of the running game.
    fn pause_game(&mut self);
}

/// Source of the viewport's current placement on the page.
pub trait Viewport {
    /// Recompute the absolute position and size of the game screen.
    fn absolute_position(&mut self) -> ScreenRect;
}
