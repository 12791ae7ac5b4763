//! Core engine types: cells, grid, state, actions, RNG, configuration.
//!
//! This module contains the data model. The rules that transform it live in
//! `rules`, `undo` and `init`.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{ActionCounters, GameAction, MoveRecord};
pub use config::{ActionCosts, AutoBlockConfig, CostScaling, Difficulty, GameConfig};
pub use rng::{pick_unique_indexes, GameRng, GameRngState};
pub use state::{Cell, GameState, Grid, StateSnapshot};
