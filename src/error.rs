//! Configuration errors.
//!
//! Normal play never fails: inapplicable actions are no-ops and running out
//! of score ends the game. The only errors are misconfigurations detected
//! when a game is created or a grid is loaded.

use thiserror::Error;

/// A game configuration that cannot produce a valid game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Asked to sample more distinct indexes than the range holds.
    #[error("cannot pick {count} unique indexes from a range of {range}")]
    SampleExceedsRange { count: usize, range: usize },

    /// Grid side length must be at least 1.
    #[error("invalid grid size {0}")]
    InvalidGridSize(usize),

    /// More starting cells requested than the grid has.
    #[error("{requested} unblocked cells requested but the grid only holds {capacity}")]
    TooManyUnblocked { requested: usize, capacity: usize },

    /// Cell count does not match the side length.
    #[error("grid of size {size} needs {expected} cells, found {found}")]
    GridLengthMismatch {
        size: usize,
        expected: usize,
        found: usize,
    },

    /// The undo history needs room for at least one move.
    #[error("undo depth must be at least 1")]
    ZeroUndoDepth,
}
