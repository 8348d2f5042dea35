use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::app::keyboard::*;
use crate::app::pointer::{
    ButtonId, BUTTON_BACK, BUTTON_FORWARD, BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT,
};

/// Maps a physical key to the engine's key numbering. Keys without a slot
/// are dropped.
pub fn key_id(key: PhysicalKey) -> Option<KeyId> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    let id = match code {
        KeyCode::Space => KEY_SPACE,
        KeyCode::Quote => KEY_APOSTROPHE,
        KeyCode::Comma => KEY_COMMA,
        KeyCode::Minus => KEY_MINUS,
        KeyCode::Period => KEY_PERIOD,
        KeyCode::Slash => KEY_SLASH,
        KeyCode::Digit0 => digit_key(0),
        KeyCode::Digit1 => digit_key(1),
        KeyCode::Digit2 => digit_key(2),
        KeyCode::Digit3 => digit_key(3),
        KeyCode::Digit4 => digit_key(4),
        KeyCode::Digit5 => digit_key(5),
        KeyCode::Digit6 => digit_key(6),
        KeyCode::Digit7 => digit_key(7),
        KeyCode::Digit8 => digit_key(8),
        KeyCode::Digit9 => digit_key(9),
        KeyCode::Semicolon => KEY_SEMICOLON,
        KeyCode::Equal => KEY_EQUAL,
        KeyCode::KeyA => letter_key(0),
        KeyCode::KeyB => letter_key(1),
        KeyCode::KeyC => letter_key(2),
        KeyCode::KeyD => letter_key(3),
        KeyCode::KeyE => letter_key(4),
        KeyCode::KeyF => letter_key(5),
        KeyCode::KeyG => letter_key(6),
        KeyCode::KeyH => letter_key(7),
        KeyCode::KeyI => letter_key(8),
        KeyCode::KeyJ => letter_key(9),
        KeyCode::KeyK => letter_key(10),
        KeyCode::KeyL => letter_key(11),
        KeyCode::KeyM => letter_key(12),
        KeyCode::KeyN => letter_key(13),
        KeyCode::KeyO => letter_key(14),
        KeyCode::KeyP => letter_key(15),
        KeyCode::KeyQ => letter_key(16),
        KeyCode::KeyR => letter_key(17),
        KeyCode::KeyS => letter_key(18),
        KeyCode::KeyT => letter_key(19),
        KeyCode::KeyU => letter_key(20),
        KeyCode::KeyV => letter_key(21),
        KeyCode::KeyW => letter_key(22),
        KeyCode::KeyX => letter_key(23),
        KeyCode::KeyY => letter_key(24),
        KeyCode::KeyZ => letter_key(25),
        KeyCode::BracketLeft => KEY_LEFT_BRACKET,
        KeyCode::Backslash => KEY_BACKSLASH,
        KeyCode::BracketRight => KEY_RIGHT_BRACKET,
        KeyCode::Backquote => KEY_GRAVE_ACCENT,
        KeyCode::Escape => KEY_ESCAPE,
        KeyCode::Enter => KEY_ENTER,
        KeyCode::Tab => KEY_TAB,
        KeyCode::Backspace => KEY_BACKSPACE,
        KeyCode::Insert => KEY_INSERT,
        KeyCode::Delete => KEY_DELETE,
        KeyCode::ArrowRight => KEY_RIGHT,
        KeyCode::ArrowLeft => KEY_LEFT,
        KeyCode::ArrowDown => KEY_DOWN,
        KeyCode::ArrowUp => KEY_UP,
        KeyCode::PageUp => KEY_PAGE_UP,
        KeyCode::PageDown => KEY_PAGE_DOWN,
        KeyCode::Home => KEY_HOME,
        KeyCode::End => KEY_END,
        KeyCode::CapsLock => KEY_CAPS_LOCK,
        KeyCode::ScrollLock => KEY_SCROLL_LOCK,
        KeyCode::NumLock => KEY_NUM_LOCK,
        KeyCode::PrintScreen => KEY_PRINT_SCREEN,
        KeyCode::Pause => KEY_PAUSE,
        KeyCode::F1 => function_key(1),
        KeyCode::F2 => function_key(2),
        KeyCode::F3 => function_key(3),
        KeyCode::F4 => function_key(4),
        KeyCode::F5 => function_key(5),
        KeyCode::F6 => function_key(6),
        KeyCode::F7 => function_key(7),
        KeyCode::F8 => function_key(8),
        KeyCode::F9 => function_key(9),
        KeyCode::F10 => function_key(10),
        KeyCode::F11 => function_key(11),
        KeyCode::F12 => function_key(12),
        KeyCode::F13 => function_key(13),
        KeyCode::F14 => function_key(14),
        KeyCode::F15 => function_key(15),
        KeyCode::F16 => function_key(16),
        KeyCode::F17 => function_key(17),
        KeyCode::F18 => function_key(18),
        KeyCode::F19 => function_key(19),
        KeyCode::F20 => function_key(20),
        KeyCode::F21 => function_key(21),
        KeyCode::F22 => function_key(22),
        KeyCode::F23 => function_key(23),
        KeyCode::F24 => function_key(24),
        KeyCode::F25 => function_key(25),
        KeyCode::Numpad0 => keypad_digit_key(0),
        KeyCode::Numpad1 => keypad_digit_key(1),
        KeyCode::Numpad2 => keypad_digit_key(2),
        KeyCode::Numpad3 => keypad_digit_key(3),
        KeyCode::Numpad4 => keypad_digit_key(4),
        KeyCode::Numpad5 => keypad_digit_key(5),
        KeyCode::Numpad6 => keypad_digit_key(6),
        KeyCode::Numpad7 => keypad_digit_key(7),
        KeyCode::Numpad8 => keypad_digit_key(8),
        KeyCode::Numpad9 => keypad_digit_key(9),
        KeyCode::NumpadDecimal => KEY_KP_DECIMAL,
        KeyCode::NumpadDivide => KEY_KP_DIVIDE,
        KeyCode::NumpadMultiply => KEY_KP_MULTIPLY,
        KeyCode::NumpadSubtract => KEY_KP_SUBTRACT,
        KeyCode::NumpadAdd => KEY_KP_ADD,
        KeyCode::NumpadEnter => KEY_KP_ENTER,
        KeyCode::NumpadEqual => KEY_KP_EQUAL,
        KeyCode::ShiftLeft => KEY_LEFT_SHIFT,
        KeyCode::ControlLeft => KEY_LEFT_CONTROL,
        KeyCode::AltLeft => KEY_LEFT_ALT,
        KeyCode::SuperLeft => KEY_LEFT_SUPER,
        KeyCode::ShiftRight => KEY_RIGHT_SHIFT,
        KeyCode::ControlRight => KEY_RIGHT_CONTROL,
        KeyCode::AltRight => KEY_RIGHT_ALT,
        KeyCode::SuperRight => KEY_RIGHT_SUPER,
        KeyCode::ContextMenu => KEY_MENU,
        _ => return None,
    };
    Some(id)
}

/// `Other` buttons keep their platform index; the tracker ignores any that
/// fall outside its table.
pub fn button_id(button: MouseButton) -> Option<ButtonId> {
    match button {
        MouseButton::Left => Some(BUTTON_LEFT),
        MouseButton::Right => Some(BUTTON_RIGHT),
        MouseButton::Middle => Some(BUTTON_MIDDLE),
        MouseButton::Back => Some(BUTTON_BACK),
        MouseButton::Forward => Some(BUTTON_FORWARD),
        MouseButton::Other(index) => ButtonId::try_from(index).ok(),
    }
}

/// Line deltas pass through as lines, pixel deltas as pixels.
pub fn scroll_offsets(delta: MouseScrollDelta) -> (f64, f64) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (f64::from(x), f64::from(y)),
        MouseScrollDelta::PixelDelta(position) => (position.x, position.y),
    }
}
