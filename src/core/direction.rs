//! Move directions.
//!
//! A move shifts the whole board in one of four directions. Directions are
//! plain values supplied per move request; the engine holds no directional
//! state.

use serde::{Deserialize, Serialize};

/// The four possible move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All four directions, in declaration order.
    ///
    /// ```
    /// use rust_2048::Direction;
    ///
    /// assert_eq!(Direction::all().len(), 4);
    /// ```
    #[must_use]
    pub const fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Convert a raw u8 to a direction (0=Up, 1=Down, 2=Left, 3=Right).
    ///
    /// Returns `None` for values outside 0..=3. Useful for collaborators
    /// that encode input as integers (key codes, action indices).
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Whether this direction shifts along columns rather than rows.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether this direction compacts towards the high-index end of a line.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{name}")
    }
}
