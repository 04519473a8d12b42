//! The board engine: owned grid state plus all transition rules.
//!
//! ## Contract
//!
//! The engine is the single owner of the grid. A UI collaborator forwards
//! one direction per input event to [`BoardEngine::step`] and re-renders
//! from the returned [`MoveResult`]. The engine knows nothing about
//! rendering, input devices, or timers.
//!
//! ## Move semantics
//!
//! A step shifts the grid (see [`Grid::shifted`]). If anything moved, the
//! new grid is committed and exactly one tile spawns into a uniformly
//! random empty cell; if nothing moved, the grid is untouched and nothing
//! spawns. Win and game-over flags are recomputed against the post-spawn
//! grid either way.
//!
//! `won` and `game_over` are independent: a board can hold the target tile
//! and be fully locked at the same time, and both flags are then reported
//! true. The engine keeps accepting `step` calls after a win; whether to
//! continue play is the collaborator's choice.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::direction::Direction;
use crate::core::grid::Grid;
use crate::core::rng::GameRng;

/// Tile values a spawn can produce, indexed by the spawn weight table.
const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Result of one move attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Snapshot of the grid after the move (and spawn, if any).
    pub grid: Grid,

    /// Whether any cell's value or position changed.
    ///
    /// When false, `grid` is identical to the pre-move grid and no tile
    /// was spawned.
    pub moved: bool,

    /// Whether any cell holds the target value.
    pub won: bool,

    /// Whether no move can change the board: no empty cell and no equal
    /// 4-adjacent pair. Independent of `won`; both can be true at once.
    pub game_over: bool,
}

/// The 2048 board engine.
///
/// Owns the grid, the spawn RNG, and the game configuration. Multiple
/// engines are fully independent games.
///
/// ## Example
///
/// ```
/// use rust_2048::{BoardEngine, Direction};
///
/// let mut engine = BoardEngine::with_seed(42);
/// let result = engine.step(Direction::Left);
/// if result.moved {
///     println!("{}", result.grid);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: GameConfig,
    grid: Grid,
    rng: GameRng,
}

impl BoardEngine {
    /// Create a new game with the given configuration and seed.
    ///
    /// The board starts empty and two tiles are spawned.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut engine = Self {
            grid: Grid::new(config.grid_size),
            rng: GameRng::new(seed),
            config,
        };
        engine.spawn_tile();
        engine.spawn_tile();
        engine
    }

    /// Create a new game with the default configuration (4×4, target 2048).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default(), seed)
    }

    /// Resume from a known position. Intended for tests and scripted
    /// setups; no tiles are spawned.
    ///
    /// # Panics
    ///
    /// Panics if the grid's size differs from `config.grid_size`.
    #[must_use]
    pub fn from_grid(config: GameConfig, grid: Grid, seed: u64) -> Self {
        assert_eq!(
            grid.size(),
            config.grid_size,
            "Grid size must match configuration"
        );
        Self {
            config,
            grid,
            rng: GameRng::new(seed),
        }
    }

    /// Start fresh in place: clear the grid, reseed, spawn two tiles.
    pub fn reset(&mut self, seed: u64) {
        self.grid = Grid::new(self.config.grid_size);
        self.rng = GameRng::new(seed);
        self.spawn_tile();
        self.spawn_tile();
    }

    /// Execute a move in the given direction.
    ///
    /// Every direction is always valid to request; at worst the result is
    /// a no-op with `moved == false`.
    pub fn step(&mut self, direction: Direction) -> MoveResult {
        let (next, moved) = self.grid.shifted(direction);
        if moved {
            self.grid = next;
            self.spawn_tile();
        }

        MoveResult {
            grid: self.grid.clone(),
            moved,
            won: self.is_won(),
            game_over: self.is_game_over(),
        }
    }

    /// Whether any cell holds the target value.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.grid.contains(self.config.target)
    }

    /// Whether the board is locked: no empty cell and no equal 4-adjacent
    /// pair. Does not consider whether the game was already won.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.grid.is_full() && !self.grid.has_adjacent_equal()
    }

    /// Read-only view of the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Largest tile value on the board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    /// Number of empty cells on the board.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.empty_cells().len()
    }

    /// Spawn one tile into a uniformly random empty cell.
    ///
    /// The value is 2 or 4, weighted by `config.four_probability`. Silent
    /// no-op on a full grid; callers check `is_game_over` rather than rely
    /// on a spawn happening.
    fn spawn_tile(&mut self) {
        let empty = self.grid.empty_cells();
        let Some(&(row, col)) = self.rng.choose(&empty) else {
            return;
        };

        let weights = [1.0 - self.config.four_probability, self.config.four_probability];
        let value = self
            .rng
            .choose_weighted(&weights)
            .map_or(SPAWN_VALUES[0], |i| SPAWN_VALUES[i]);
        self.grid.set(row, col, value);
    }
}
