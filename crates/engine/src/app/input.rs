use super::keyboard::{KeyId, KeyInputTracker};
use super::pointer::{ButtonId, PointerInputTracker};

/// Per-input tri-state record shared by keys and pointer buttons.
///
/// `released` is edge-triggered: it stays set until the owning tracker clears
/// it at the end of the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeState {
    pub pressed: bool,
    pub held: bool,
    pub released: bool,
}

impl EdgeState {
    /// A down notification arriving while the input is still pressed from an
    /// earlier notification escalates it to held.
    pub(crate) fn on_down(&mut self) {
        if self.pressed {
            self.held = true;
        }
        self.pressed = true;
    }

    pub(crate) fn on_up(&mut self) {
        self.released = true;
        self.pressed = false;
        self.held = false;
    }

    pub(crate) fn clear_released(&mut self) {
        self.released = false;
    }
}

/// Receiver for raw device events, fed by the window during the poll step.
pub trait InputSink {
    fn on_key(&mut self, key: KeyId, is_down: bool);
    fn on_pointer_move(&mut self, x: f64, y: f64);
    fn on_pointer_button(&mut self, button: ButtonId, is_down: bool);
    fn on_scroll(&mut self, dx: f64, dy: f64);
}

/// The one logical keyboard and pointer of the process.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: KeyInputTracker,
    pointer: PointerInputTracker,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &KeyInputTracker {
        &self.keys
    }

    pub fn pointer(&self) -> &PointerInputTracker {
        &self.pointer
    }

    /// Clears transient edges once the scene has observed them.
    pub fn end_frame(&mut self) {
        self.keys.reset_released_flags();
        self.pointer.end_frame();
    }
}

impl InputSink for InputState {
    fn on_key(&mut self, key: KeyId, is_down: bool) {
        if is_down {
            self.keys.on_press(key);
        } else {
            self.keys.on_release(key);
        }
    }

    fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.on_move(x, y);
    }

    fn on_pointer_button(&mut self, button: ButtonId, is_down: bool) {
        self.pointer.on_button(button, is_down);
    }

    fn on_scroll(&mut self, dx: f64, dy: f64) {
        self.pointer.on_scroll(dx, dy);
    }
}
