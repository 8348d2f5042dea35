use super::input::EdgeState;

pub type ButtonId = u8;

pub const POINTER_BUTTON_COUNT: usize = 7;

pub const BUTTON_LEFT: ButtonId = 0;
pub const BUTTON_RIGHT: ButtonId = 1;
pub const BUTTON_MIDDLE: ButtonId = 2;
pub const BUTTON_BACK: ButtonId = 3;
pub const BUTTON_FORWARD: ButtonId = 4;

/// Pointer buttons plus continuous position, scroll and drag state.
///
/// `position_delta` is measured against the position snapshot taken in
/// `end_frame`, so a scene sees one delta per update however many move events
/// arrived. Each move event still records where it started from, readable as
/// `last_move_delta`.
#[derive(Debug, Clone, Default)]
pub struct PointerInputTracker {
    buttons: [EdgeState; POINTER_BUTTON_COUNT],
    position: (f64, f64),
    previous_position: (f64, f64),
    last_move_from: (f64, f64),
    scroll: (f64, f64),
    dragging: bool,
}

impl PointerInputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(&mut self, x: f64, y: f64) {
        self.last_move_from = self.position;
        self.position = (x, y);
        self.dragging = self.is_any_pressed();
    }

    pub fn on_button(&mut self, button: ButtonId, is_down: bool) {
        let Some(state) = self.buttons.get_mut(button as usize) else {
            return;
        };
        if is_down {
            state.on_down();
        } else {
            state.on_up();
            // Any release ends the drag, even with other buttons still down.
            self.dragging = false;
        }
    }

    /// Latest scroll offsets replace the previous ones.
    pub fn on_scroll(&mut self, dx: f64, dy: f64) {
        self.scroll = (dx, dy);
    }

    pub fn end_frame(&mut self) {
        self.scroll = (0.0, 0.0);
        self.previous_position = self.position;
        for state in &mut self.buttons {
            state.clear_released();
        }
    }

    /// Previous position minus current position.
    pub fn position_delta(&self) -> (f64, f64) {
        (
            self.previous_position.0 - self.position.0,
            self.previous_position.1 - self.position.1,
        )
    }

    /// Offset covered by the most recent move event alone, same sign
    /// convention as `position_delta`.
    pub fn last_move_delta(&self) -> (f64, f64) {
        (
            self.last_move_from.0 - self.position.0,
            self.last_move_from.1 - self.position.1,
        )
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.0
    }

    pub fn y(&self) -> f64 {
        self.position.1
    }

    pub fn previous_position(&self) -> (f64, f64) {
        self.previous_position
    }

    pub fn scroll(&self) -> (f64, f64) {
        self.scroll
    }

    pub fn scroll_x(&self) -> f64 {
        self.scroll.0
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll.1
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_any_pressed(&self) -> bool {
        self.buttons.iter().any(|state| state.pressed)
    }

    pub fn is_button_pressed(&self, button: ButtonId) -> bool {
        self.button_state(button).pressed
    }

    pub fn is_button_held(&self, button: ButtonId) -> bool {
        self.button_state(button).held
    }

    pub fn is_button_released(&self, button: ButtonId) -> bool {
        self.button_state(button).released
    }

    pub fn button_state(&self, button: ButtonId) -> EdgeState {
        self.buttons
            .get(button as usize)
            .copied()
            .unwrap_or_default()
    }
}
