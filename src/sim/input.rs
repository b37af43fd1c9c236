//! Keyboard capability consumed by the simulation
//!
//! The simulation never sees platform key codes; it only asks whether one of
//! the keys below is currently held.

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    Left,
    Right,
    Up,
    Down,
    /// Restart after a lost session
    R,
    /// Quit
    Escape,
}

impl Key {
    pub const ALL: [Key; 10] = [
        Key::A,
        Key::D,
        Key::W,
        Key::S,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::R,
        Key::Escape,
    ];

    #[inline]
    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Anything that can answer "is this key held right now?"
pub trait KeyState {
    fn is_down(&self, key: Key) -> bool;
}

/// Snapshot of held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySet {
    bits: u16,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.bits |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.bits &= !key.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate held keys in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|k| self.is_down(*k))
    }
}

impl KeyState for KeySet {
    #[inline]
    fn is_down(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.press(key);
        }
        set
    }
}

/// Directional intent from the held keys.
///
/// Each axis is independently -1, 0 or +1. Diagonals are not normalized.
pub fn move_intent(keys: &impl KeyState) -> Vec2 {
    let mut intent = Vec2::ZERO;
    if keys.is_down(Key::A) || keys.is_down(Key::Left) {
        intent.x -= 1.0;
    }
    if keys.is_down(Key::D) || keys.is_down(Key::Right) {
        intent.x += 1.0;
    }
    if keys.is_down(Key::W) || keys.is_down(Key::Up) {
        intent.y -= 1.0;
    }
    if keys.is_down(Key::S) || keys.is_down(Key::Down) {
        intent.y += 1.0;
    }
    intent
}
