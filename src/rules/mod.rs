//! Action resolution.
//!
//! `resolve` is the state-transition function of the game: it gates an
//! action on applicability and affordability, mutates a copy of the grid,
//! evicts at most one idle cell and settles the score and Fibonacci ladder.
//! `apply` is the same transition without the outcome report.
//!
//! Neither function mutates its input, so states may be kept, compared and
//! replayed freely.

mod auto_block;
pub mod engine;
mod outcome;

pub use auto_block::evict_idle;
pub use engine::{action_cost, apply, can_afford, preview, resolve};
pub use outcome::{MoveSummary, Outcome, Preview, Resolution};
