//! Input state management
//!
//! Polls macroquad's keyboard once per frame into a plain struct, so the
//! movement resolver reads input as data and never touches the windowing
//! layer. Unmapped keys are ignored entirely.

use macroquad::prelude::{is_key_down, is_key_pressed, is_key_released, KeyCode};

/// The eight mapped movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
    ];

    fn code(self) -> KeyCode {
        match self {
            Key::W => KeyCode::W,
            Key::A => KeyCode::A,
            Key::S => KeyCode::S,
            Key::D => KeyCode::D,
            Key::Up => KeyCode::Up,
            Key::Down => KeyCode::Down,
            Key::Left => KeyCode::Left,
            Key::Right => KeyCode::Right,
        }
    }
}

/// Keyboard snapshot read by the movement resolver
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: [bool; 8],
    /// Most recent movement key press; survives the key's release.
    /// Drives the exclusive handling of a held WASD key.
    pub last_key: Option<Key>,
    /// C held: half step, slow animation
    pub crouch: bool,
    /// Space held: 2.4x step, fast animation
    pub sprint: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before the movement resolver
    pub fn poll(&mut self) {
        for key in Key::ALL {
            if is_key_pressed(key.code()) {
                self.press(key);
            }
            if is_key_released(key.code()) {
                self.release(key);
            }
        }

        self.crouch = is_key_down(KeyCode::C);
        self.sprint = is_key_down(KeyCode::Space);
    }

    /// Record a press: sets the flag and takes over `last_key`
    pub fn press(&mut self, key: Key) {
        self.pressed[key as usize] = true;
        self.last_key = Some(key);
    }

    /// Record a release: clears the flag, leaves `last_key` alone
    pub fn release(&mut self, key: Key) {
        self.pressed[key as usize] = false;
    }

    /// Is the key currently held?
    pub fn down(&self, key: Key) -> bool {
        self.pressed[key as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_flag_and_last_key() {
        let mut keys = KeyState::new();

        keys.press(Key::W);
        assert!(keys.down(Key::W));
        assert_eq!(keys.last_key, Some(Key::W));

        keys.press(Key::Left);
        assert!(keys.down(Key::W));
        assert!(keys.down(Key::Left));
        assert_eq!(keys.last_key, Some(Key::Left));
    }

    #[test]
    fn test_release_clears_flag_but_not_last_key() {
        let mut keys = KeyState::new();

        keys.press(Key::D);
        keys.release(Key::D);

        assert!(!keys.down(Key::D));
        assert_eq!(keys.last_key, Some(Key::D));
    }

    #[test]
    fn test_fresh_state_has_nothing_held() {
        let keys = KeyState::new();
        assert!(Key::ALL.iter().all(|&key| !keys.down(key)));
        assert_eq!(keys.last_key, None);
        assert!(!keys.crouch);
        assert!(!keys.sprint);
    }
}
