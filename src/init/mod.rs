//! New game construction.
//!
//! A new game is a fully blocked grid with `start_unblocked` cells opened
//! at value 1. Which cells open is drawn from a seeded `GameRng`, so the
//! same seed and configuration always produce the same board.

use tracing::debug;

use crate::core::{pick_unique_indexes, Cell, GameConfig, GameRng, GameState, Grid};
use crate::error::ConfigError;

/// Build a new game from `seed`, or from a fresh seed when `None`.
///
/// Fails fast on a configuration that cannot produce a board.
///
/// ```
/// use fib_grid::core::GameConfig;
/// use fib_grid::init::create_new_game;
///
/// let config = GameConfig::default();
/// let a = create_new_game(Some(12345), &config).unwrap();
/// let b = create_new_game(Some(12345), &config).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.unblocked_count(), 4);
/// ```
pub fn create_new_game(seed: Option<u32>, config: &GameConfig) -> Result<GameState, ConfigError> {
    let mut rng = match seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    new_game_with_rng(&mut rng, config)
}

/// Build a new game drawing from an existing generator.
pub fn new_game_with_rng(rng: &mut GameRng, config: &GameConfig) -> Result<GameState, ConfigError> {
    config.validate()?;

    let mut grid = Grid::blocked(config.size);
    let opened = pick_unique_indexes(config.start_unblocked, rng, grid.len())?;
    for &index in &opened {
        grid[index] = Cell::open(1);
    }

    debug!(seed = rng.seed(), ?opened, "new game");
    Ok(GameState::new(grid, config.start_score))
}
