//! The action state machine.
//!
//! Evaluation order for `resolve(state, index, action, config)`:
//!
//! 1. A finished game absorbs every action.
//! 2. UNBLOCK needs a blocked target, the others an unblocked one; a
//!    mismatch is a no-op.
//! 3. An unaffordable action ends the game without charging anything.
//! 4. The action is resolved on a copy of the grid. SUM/MUL read the
//!    pre-move grid and reset every participating cell to 1.
//! 5. The matching counter is bumped, one idle cell may be re-blocked, the
//!    Fibonacci ladder and the score are settled, and the move is recorded.

use tracing::{debug, trace};

use super::auto_block::evict_idle;
use super::outcome::{MoveSummary, Outcome, Preview, Resolution};
use crate::core::{Cell, GameAction, GameConfig, GameState, Grid, MoveRecord, StateSnapshot};
use crate::fib::{is_fibonacci, next_required_fib};
use crate::grid::{neighbor_indexes, Neighborhood};

/// Whether the current score covers `cost`.
#[must_use]
pub fn can_afford(state: &GameState, cost: u64) -> bool {
    state.score >= cost
}

/// Cost of `action` in `state`, including any escalation.
#[must_use]
pub fn action_cost(state: &GameState, action: GameAction, config: &GameConfig) -> u64 {
    config.cost_of(action, &state.counters)
}

/// Apply an action and return the new state.
#[must_use]
pub fn apply(state: &GameState, index: usize, action: GameAction, config: &GameConfig) -> GameState {
    resolve(state, index, action, config).state
}

/// Apply an action and report what happened.
#[must_use]
pub fn resolve(
    state: &GameState,
    index: usize,
    action: GameAction,
    config: &GameConfig,
) -> Resolution {
    if state.game_over {
        return unchanged(state, Outcome::Absorbed);
    }
    if !is_applicable(state, index, action) {
        trace!(index, %action, "action not applicable");
        return unchanged(state, Outcome::NotApplicable);
    }

    let cost = action_cost(state, action, config);
    if !can_afford(state, cost) {
        debug!(index, %action, cost, score = state.score, "cannot afford action, game over");
        let mut next = state.clone();
        next.game_over = true;
        return Resolution {
            state: next,
            outcome: Outcome::GameOver { cost },
        };
    }

    let prev_state = state.snapshot();
    let move_number = state.move_number + 1;

    let mut grid = state.grid.clone();
    let (result_value, reset_cells) = resolve_cells(&state.grid, &mut grid, index, action, move_number);

    let mut counters = state.counters;
    counters.record(action);

    let auto_blocked = evict_idle(&mut grid, index, move_number, &config.auto_block);
    if let Some(evicted) = auto_blocked {
        debug!(evicted, move_number, "idle cell re-blocked");
    }

    let mut best_fib = state.best_fib;
    let mut next_fib = state.next_fib;
    let mut achieved_fibs = state.achieved_fibs.clone();
    let mut bonus = 0;
    let mut target_hit = false;
    if is_fibonacci(result_value) {
        best_fib = best_fib.max(result_value);
        if result_value == state.next_fib && !achieved_fibs.contains(&result_value) {
            achieved_fibs.push(result_value);
            target_hit = true;
            bonus = config.fib_bonus;
            next_fib = next_required_fib(state.next_fib);
            debug!(fib = result_value, next_fib, bonus, "fibonacci target reached");
        }
    }

    let score = (state.score - cost)
        .saturating_add(bonus)
        .saturating_add(result_value);

    let mut next = GameState::from_snapshot(
        StateSnapshot {
            grid,
            score,
            best_fib,
            next_fib,
            achieved_fibs,
            counters,
            move_number,
            game_over: false,
        },
        state.history().clone(),
    );
    next.push_move(
        MoveRecord {
            action,
            clicked_index: index,
            prev_state,
        },
        config.undo_depth,
    );

    Resolution {
        state: next,
        outcome: Outcome::Applied(MoveSummary {
            action,
            index,
            cost,
            result_value,
            bonus,
            target_hit,
            score_before: state.score,
            score_after: score,
            reset_cells,
            auto_blocked,
        }),
    }
}

/// Predict an action's effect without applying it.
///
/// `None` when the game is over or the action does not apply to the cell.
#[must_use]
pub fn preview(
    state: &GameState,
    index: usize,
    action: GameAction,
    config: &GameConfig,
) -> Option<Preview> {
    if state.game_over || !is_applicable(state, index, action) {
        return None;
    }

    let (result, resets) = match action {
        GameAction::Unblock => (1, 0),
        GameAction::Inc => (state.grid[index].value.saturating_add(1), 0),
        GameAction::Sum | GameAction::Mul => {
            let neighbors = neighbor_indexes(index, &state.grid);
            (reduce(&state.grid, &neighbors, action), neighbors.len() - 1)
        }
    };
    let cost = action_cost(state, action, config);

    Some(Preview {
        result,
        resets,
        cost,
        affordable: can_afford(state, cost),
    })
}

fn unchanged(state: &GameState, outcome: Outcome) -> Resolution {
    Resolution {
        state: state.clone(),
        outcome,
    }
}

fn is_applicable(state: &GameState, index: usize, action: GameAction) -> bool {
    state
        .grid
        .get(index)
        .is_some_and(|cell| cell.blocked == action.targets_blocked())
}

/// Sum or product of the neighborhood's values, saturating.
fn reduce(grid: &Grid, neighbors: &Neighborhood, action: GameAction) -> u64 {
    let values = neighbors.iter().map(|&n| grid[n].value);
    if action == GameAction::Mul {
        values.fold(1, u64::saturating_mul)
    } else {
        values.fold(0, u64::saturating_add)
    }
}

/// Write the action's effect into `grid`. Returns the result value and the
/// neighbors reset besides the target.
fn resolve_cells(
    before: &Grid,
    grid: &mut Grid,
    index: usize,
    action: GameAction,
    move_number: u32,
) -> (u64, Neighborhood) {
    match action {
        GameAction::Unblock => {
            grid[index] = Cell::open(1).touched_at(move_number);
            (1, Neighborhood::new())
        }
        GameAction::Inc => {
            let cell = &mut grid[index];
            cell.value = cell.value.saturating_add(1);
            cell.last_touched_move = move_number;
            (cell.value, Neighborhood::new())
        }
        GameAction::Sum | GameAction::Mul => {
            let neighbors = neighbor_indexes(index, before);
            let result = reduce(before, &neighbors, action);
            for &n in &neighbors {
                grid[n].value = 1;
                grid[n].last_touched_move = move_number;
            }
            grid[index].value = result;
            grid[index].last_touched_move = move_number;

            let resets = neighbors.into_iter().filter(|&n| n != index).collect();
            (result, resets)
        }
    }
}
