//! The board engine: state transitions, spawning, win and game-over rules.

pub mod board;

pub use board::{BoardEngine, MoveResult};
