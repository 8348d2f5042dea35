use super::input::EdgeState;

pub type KeyId = u16;

/// Size of the key table. Ids at or above this are ignored on write and read
/// as never pressed.
pub const KEY_COUNT: usize = 350;

pub const KEY_SPACE: KeyId = 32;
pub const KEY_APOSTROPHE: KeyId = 39;
pub const KEY_COMMA: KeyId = 44;
pub const KEY_MINUS: KeyId = 45;
pub const KEY_PERIOD: KeyId = 46;
pub const KEY_SLASH: KeyId = 47;
pub const KEY_0: KeyId = 48;
pub const KEY_SEMICOLON: KeyId = 59;
pub const KEY_EQUAL: KeyId = 61;
pub const KEY_A: KeyId = 65;
pub const KEY_D: KeyId = 68;
pub const KEY_S: KeyId = 83;
pub const KEY_W: KeyId = 87;
pub const KEY_LEFT_BRACKET: KeyId = 91;
pub const KEY_BACKSLASH: KeyId = 92;
pub const KEY_RIGHT_BRACKET: KeyId = 93;
pub const KEY_GRAVE_ACCENT: KeyId = 96;
pub const KEY_ESCAPE: KeyId = 256;
pub const KEY_ENTER: KeyId = 257;
pub const KEY_TAB: KeyId = 258;
pub const KEY_BACKSPACE: KeyId = 259;
pub const KEY_INSERT: KeyId = 260;
pub const KEY_DELETE: KeyId = 261;
pub const KEY_RIGHT: KeyId = 262;
pub const KEY_LEFT: KeyId = 263;
pub const KEY_DOWN: KeyId = 264;
pub const KEY_UP: KeyId = 265;
pub const KEY_PAGE_UP: KeyId = 266;
pub const KEY_PAGE_DOWN: KeyId = 267;
pub const KEY_HOME: KeyId = 268;
pub const KEY_END: KeyId = 269;
pub const KEY_CAPS_LOCK: KeyId = 280;
pub const KEY_SCROLL_LOCK: KeyId = 281;
pub const KEY_NUM_LOCK: KeyId = 282;
pub const KEY_PRINT_SCREEN: KeyId = 283;
pub const KEY_PAUSE: KeyId = 284;
pub const KEY_F1: KeyId = 290;
pub const KEY_KP_0: KeyId = 320;
pub const KEY_KP_DECIMAL: KeyId = 330;
pub const KEY_KP_DIVIDE: KeyId = 331;
pub const KEY_KP_MULTIPLY: KeyId = 332;
pub const KEY_KP_SUBTRACT: KeyId = 333;
pub const KEY_KP_ADD: KeyId = 334;
pub const KEY_KP_ENTER: KeyId = 335;
pub const KEY_KP_EQUAL: KeyId = 336;
pub const KEY_LEFT_SHIFT: KeyId = 340;
pub const KEY_LEFT_CONTROL: KeyId = 341;
pub const KEY_LEFT_ALT: KeyId = 342;
pub const KEY_LEFT_SUPER: KeyId = 343;
pub const KEY_RIGHT_SHIFT: KeyId = 344;
pub const KEY_RIGHT_CONTROL: KeyId = 345;
pub const KEY_RIGHT_ALT: KeyId = 346;
pub const KEY_RIGHT_SUPER: KeyId = 347;
pub const KEY_MENU: KeyId = 348;

/// Letter keys are contiguous from `KEY_A`, digits from `KEY_0`, function
/// keys from `KEY_F1` (through F25) and keypad digits from `KEY_KP_0`.
pub const fn letter_key(offset: u8) -> KeyId {
    KEY_A + offset as KeyId
}

pub const fn digit_key(digit: u8) -> KeyId {
    KEY_0 + digit as KeyId
}

pub const fn function_key(number: u8) -> KeyId {
    KEY_F1 + number as KeyId - 1
}

pub const fn keypad_digit_key(digit: u8) -> KeyId {
    KEY_KP_0 + digit as KeyId
}

#[derive(Debug, Clone)]
pub struct KeyInputTracker {
    keys: [EdgeState; KEY_COUNT],
}

impl Default for KeyInputTracker {
    fn default() -> Self {
        Self {
            keys: [EdgeState::default(); KEY_COUNT],
        }
    }
}

impl KeyInputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_press(&mut self, key: KeyId) {
        if let Some(state) = self.keys.get_mut(key as usize) {
            state.on_down();
        }
    }

    pub fn on_release(&mut self, key: KeyId) {
        if let Some(state) = self.keys.get_mut(key as usize) {
            state.on_up();
        }
    }

    pub fn is_pressed(&self, key: KeyId) -> bool {
        self.state(key).pressed
    }

    pub fn is_held(&self, key: KeyId) -> bool {
        self.state(key).held
    }

    pub fn is_released(&self, key: KeyId) -> bool {
        self.state(key).released
    }

    pub fn state(&self, key: KeyId) -> EdgeState {
        self.keys.get(key as usize).copied().unwrap_or_default()
    }

    /// Must run once per frame, after the scene has had its chance to see
    /// this frame's releases.
    pub fn reset_released_flags(&mut self) {
        for state in &mut self.keys {
            state.clear_released();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_domain_keys_are_ignored() {
        let mut keys = KeyInputTracker::new();
        for key in [KEY_COUNT as KeyId, 500, KeyId::MAX] {
            keys.on_press(key);
            keys.on_press(key);
            assert!(!keys.is_pressed(key));
            assert!(!keys.is_held(key));
            keys.on_release(key);
            assert!(!keys.is_released(key));
        }
        assert!((0..KEY_COUNT as KeyId).all(|key| keys.state(key) == EdgeState::default()));
    }

    #[test]
    fn single_press_is_pressed_not_held() {
        let mut keys = KeyInputTracker::new();
        keys.on_press(KEY_SPACE);

        assert!(keys.is_pressed(KEY_SPACE));
        assert!(!keys.is_held(KEY_SPACE));
        assert!(!keys.is_released(KEY_SPACE));
    }

    #[test]
    fn second_press_without_release_sets_held() {
        let mut keys = KeyInputTracker::new();
        keys.on_press(KEY_W);
        keys.on_press(KEY_W);

        assert!(keys.is_pressed(KEY_W));
        assert!(keys.is_held(KEY_W));
    }

    #[test]
    fn press_after_release_starts_over() {
        let mut keys = KeyInputTracker::new();
        keys.on_press(KEY_W);
        keys.on_release(KEY_W);
        keys.on_press(KEY_W);

        assert!(keys.is_pressed(KEY_W));
        assert!(!keys.is_held(KEY_W));
        assert!(keys.is_released(KEY_W));
    }

    #[test]
    fn release_always_clears_pressed_and_held() {
        let mut keys = KeyInputTracker::new();
        keys.on_release(KEY_ESCAPE);
        assert_eq!(
            keys.state(KEY_ESCAPE),
            EdgeState {
                pressed: false,
                held: false,
                released: true,
            }
        );

        keys.on_press(KEY_ENTER);
        keys.on_press(KEY_ENTER);
        keys.on_release(KEY_ENTER);
        assert!(!keys.is_pressed(KEY_ENTER));
        assert!(!keys.is_held(KEY_ENTER));
        assert!(keys.is_released(KEY_ENTER));
    }

    #[test]
    fn reset_clears_released_only() {
        let mut keys = KeyInputTracker::new();
        keys.on_press(KEY_A);
        keys.on_press(KEY_A);
        keys.on_press(KEY_D);
        keys.on_release(KEY_D);

        keys.reset_released_flags();

        assert!((0..KEY_COUNT as KeyId).all(|key| !keys.is_released(key)));
        assert!(keys.is_pressed(KEY_A));
        assert!(keys.is_held(KEY_A));
        assert!(!keys.is_pressed(KEY_D));
    }

    #[test]
    fn press_then_release_across_frames() {
        let mut keys = KeyInputTracker::new();

        keys.on_press(KEY_A);
        assert!(keys.is_pressed(KEY_A));
        assert!(!keys.is_held(KEY_A));
        keys.reset_released_flags();

        keys.on_release(KEY_A);
        assert!(keys.is_released(KEY_A));
        assert!(!keys.is_pressed(KEY_A));
        keys.reset_released_flags();

        assert!(!keys.is_released(KEY_A));
    }

    #[test]
    fn key_numbering_helpers_match_named_constants() {
        assert_eq!(letter_key(0), KEY_A);
        assert_eq!(letter_key(3), KEY_D);
        assert_eq!(letter_key(22), KEY_W);
        assert_eq!(digit_key(0), KEY_0);
        assert_eq!(function_key(1), KEY_F1);
        assert_eq!(function_key(25), 314);
        assert_eq!(keypad_digit_key(9), 329);
        assert!((KEY_MENU as usize) < KEY_COUNT);
    }
}
