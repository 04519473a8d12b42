//! Game configuration.
//!
//! Board size, target tile, and spawn weighting are configuration, not
//! engine state: the engine never hardcodes them. The defaults reproduce
//! the classic game on a 4×4 board.

use serde::{Deserialize, Serialize};

/// Configuration for a game of 2048.
///
/// ## Spawn weighting
///
/// `four_probability` is the chance a spawned tile is a 4 rather than a 2.
/// The default is 0.5 (an even split). Most published implementations of
/// the game weight spawns 90/10 in favor of 2; use
/// [`with_four_probability`](Self::with_four_probability) to get that
/// behavior. The even split is kept as the default deliberately rather
/// than silently corrected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board. Default 4.
    pub grid_size: usize,

    /// Tile value that triggers the win condition. Default 2048.
    pub target: u32,

    /// Probability a spawned tile is a 4 (otherwise a 2). Default 0.5.
    pub four_probability: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            target: 2048,
            four_probability: 0.5,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the classic defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size < 2`.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        assert!(grid_size >= 2, "Grid size must be at least 2");
        self.grid_size = grid_size;
        self
    }

    /// Set the winning tile value.
    ///
    /// # Panics
    ///
    /// Panics unless `target` is a power of two ≥ 4 (it must be reachable
    /// by merging).
    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        assert!(
            target >= 4 && target.is_power_of_two(),
            "Target must be a power of two >= 4"
        );
        self.target = target;
        self
    }

    /// Set the probability that a spawned tile is a 4.
    ///
    /// # Panics
    ///
    /// Panics unless `probability` is within `0.0..=1.0`.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Spawn probability must be within 0.0..=1.0"
        );
        self.four_probability = probability;
        self
    }
}
