//! Core engine types: grid, directions, RNG, configuration.
//!
//! This module contains the fundamental building blocks. The grid
//! transforms here are pure; all mutation and randomness lives in the
//! engine layer.

pub mod config;
pub mod direction;
pub mod grid;
pub mod rng;

pub use config::GameConfig;
pub use direction::Direction;
pub use grid::{compress_row, merge_row, shift_row, Grid};
pub use rng::{GameRng, GameRngState};
