use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to. The shell maps physical key codes to
/// these before forwarding press/release edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Up,
    Down,
    /// Discards the whole world and rebuilds it.
    Reset,
}

/// Held-state of the four directional keys.
///
/// Flags are last-writer-wins with no debouncing: key-down sets, key-up
/// clears, and repeated identical events are no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionState {
    /// Register a key-down edge. `Reset` is not a direction and is ignored.
    pub fn press(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.left = true,
            GameKey::Right => self.right = true,
            GameKey::Up => self.up = true,
            GameKey::Down => self.down = true,
            GameKey::Reset => {},
        }
    }

    /// Register a key-up edge.
    pub fn release(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.left = false,
            GameKey::Right => self.right = false,
            GameKey::Up => self.up = false,
            GameKey::Down => self.down = false,
            GameKey::Reset => {},
        }
    }

    /// Drop every held flag, as if all keys were released at once.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
