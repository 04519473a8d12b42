//! # rust-2048
//!
//! A 2048 sliding-tile board engine with deterministic, seedable RNG.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: this crate is the state-transition logic only.
//!    Windowing, rendering, and input wiring are external collaborators
//!    that call [`BoardEngine::step`] and draw the returned snapshot.
//!
//! 2. **Encapsulated state**: the grid is owned by an engine instance,
//!    never a global. Multiple independent games coexist and tests need
//!    no reset hooks.
//!
//! 3. **Configuration over convention**: board size, target tile, and
//!    spawn weighting come from [`GameConfig`]; the algorithm works for
//!    any N×N board.
//!
//! 4. **Deterministic**: the same seed and move sequence always produce
//!    the same game.
//!
//! ## Modules
//!
//! - `core`: grid, directions, RNG, configuration
//! - `engine`: the board engine and its move/spawn/terminal rules
//! - `display`: value → label/color data for rendering collaborators
//!
//! ## Example
//!
//! ```
//! use rust_2048::{BoardEngine, Direction};
//!
//! let mut engine = BoardEngine::with_seed(42);
//! let result = engine.step(Direction::Left);
//! if result.game_over {
//!     println!("Game over!\n{}", result.grid);
//! }
//! ```

pub mod core;
pub mod display;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Direction, GameConfig, GameRng, GameRngState, Grid};

pub use crate::display::{TileStyle, TileTheme};

pub use crate::engine::{BoardEngine, MoveResult};
