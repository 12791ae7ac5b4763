//! # fib-grid
//!
//! A deterministic state engine for a Fibonacci grid puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `apply` and `undo` take a state by reference and
//!    return a new one. Nothing is mutated in place and nothing is global.
//!
//! 2. **Reproducible**: A seed and a `GameConfig` fully determine the
//!    starting board; the same moves always produce the same states.
//!
//! 3. **Configuration Over Convention**: Costs, bonus, board size, eviction
//!    thresholds and undo depth all come from an explicit `GameConfig`.
//!
//! ## Rules in brief
//!
//! Each action on a cell costs score. INC adds one, SUM and MUL collapse the
//! 3x3 neighborhood into the target and reset the rest to 1, UNBLOCK opens
//! a blocked cell. The resulting value is credited to the score, and hitting
//! the next Fibonacci target pays a bonus. Cells left idle too long are
//! re-blocked, and running out of score ends the game.
//!
//! ```
//! use fib_grid::{apply, create_new_game, undo, GameAction, GameConfig};
//!
//! let config = GameConfig::default();
//! let state = create_new_game(Some(7), &config).unwrap();
//! let cell = state.unblocked_indexes()[0];
//!
//! let next = apply(&state, cell, GameAction::Inc, &config);
//! assert_eq!(next.grid[cell].value, 2);
//! assert_eq!(undo(&next), state);
//! ```
//!
//! ## Modules
//!
//! - `core`: Cells, grid, state, actions, RNG, configuration
//! - `grid`: Index mapping and neighborhoods
//! - `fib`: Fibonacci target ladder
//! - `rules`: Action resolution
//! - `undo`: Rolling back moves
//! - `init`: New game construction

pub mod core;
pub mod error;
pub mod fib;
pub mod grid;
pub mod init;
pub mod rules;
pub mod undo;

// Re-export commonly used types
pub use crate::core::{
    ActionCosts, ActionCounters, AutoBlockConfig, Cell, CostScaling, Difficulty, GameAction,
    GameConfig, GameRng, GameRngState, GameState, Grid, MoveRecord, StateSnapshot,
};

pub use crate::error::ConfigError;

pub use crate::init::create_new_game;

pub use crate::rules::{
    action_cost, apply, can_afford, preview, resolve, MoveSummary, Outcome, Preview, Resolution,
};

pub use crate::undo::undo;
