//! Population control for unblocked cells.

use crate::core::{AutoBlockConfig, Grid};

/// Re-block the longest-idle unblocked cell, if the board is over the floor.
///
/// Runs on the post-move grid. Only when more than `safety_floor` cells are
/// unblocked is a cell eligible: it must be unblocked, not `acted_on`, and
/// untouched for at least `idle_threshold` moves as of `move_number`. The
/// eligible cell with the smallest `last_touched_move` is blocked with value
/// 1 (lowest index on ties). At most one cell is blocked per call.
pub fn evict_idle(
    grid: &mut Grid,
    acted_on: usize,
    move_number: u32,
    config: &AutoBlockConfig,
) -> Option<usize> {
    if grid.unblocked_indexes().count() <= config.safety_floor {
        return None;
    }

    let victim = grid
        .unblocked_indexes()
        .filter(|&i| i != acted_on)
        .filter(|&i| move_number.saturating_sub(grid[i].last_touched_move) >= config.idle_threshold)
        .min_by_key(|&i| (grid[i].last_touched_move, i))?;

    let cell = &mut grid[victim];
    cell.blocked = true;
    cell.value = 1;
    Some(victim)
}
