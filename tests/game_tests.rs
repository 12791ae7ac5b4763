//! End-to-end game scenarios.
//!
//! These tests drive whole games through the public API: setup, long move
//! sequences, idle eviction, running out of score and walking back with undo.

use fib_grid::{
    apply, create_new_game, resolve, undo, ActionCosts, Cell, GameAction, GameConfig, GameState,
    Grid, Outcome,
};

fn open_cells(indexes: &[usize], score: u64) -> GameState {
    let mut grid = Grid::blocked(4);
    for &i in indexes {
        grid[i] = Cell::open(1);
    }
    GameState::new(grid, score)
}

// =============================================================================
// Setup and Replay
// =============================================================================

/// Same seed, same moves, same states.
#[test]
fn test_replay_is_deterministic() {
    let config = GameConfig::default().with_start_score(1_000);

    let play = || {
        let mut state = create_new_game(Some(2024), &config).unwrap();
        let mut trail = vec![state.clone()];
        for step in 0..40 {
            let open = state.unblocked_indexes();
            let index = open[step % open.len()];
            let action = [GameAction::Inc, GameAction::Sum, GameAction::Mul][step % 3];
            state = apply(&state, index, action, &config);
            trail.push(state.clone());
        }
        trail
    };

    assert_eq!(play(), play());
}

/// Seeds pick different boards.
#[test]
fn test_seeds_differ() {
    let config = GameConfig::default();
    let boards: Vec<_> = (0..8)
        .map(|seed| create_new_game(Some(seed), &config).unwrap().unblocked_indexes())
        .collect();

    assert!(boards.iter().any(|b| *b != boards[0]));
}

// =============================================================================
// Auto-block
// =============================================================================

/// The four cells left alone are evicted one at a time, oldest first, and
/// only while the board is above the floor.
#[test]
fn test_idle_cell_evicted_after_threshold() {
    let config = GameConfig::default();
    let mut state = open_cells(&[0, 1, 2, 3, 15], 10_000);
    state.next_fib = 1597;

    for _ in 0..11 {
        let r = resolve(&state, 15, GameAction::Inc, &config);
        match &r.outcome {
            Outcome::Applied(summary) => assert_eq!(summary.auto_blocked, None),
            other => panic!("unexpected outcome {other:?}"),
        }
        state = r.state;
    }
    assert_eq!(state.unblocked_count(), 5);

    let r = resolve(&state, 15, GameAction::Inc, &config);
    match &r.outcome {
        Outcome::Applied(summary) => assert_eq!(summary.auto_blocked, Some(0)),
        other => panic!("unexpected outcome {other:?}"),
    }
    state = r.state;

    assert!(state.grid[0].blocked);
    assert_eq!(state.grid[0].value, 1);
    assert_eq!(state.unblocked_count(), 4);

    for _ in 0..30 {
        state = apply(&state, 15, GameAction::Inc, &config);
        assert_eq!(state.unblocked_count(), 4);
    }
}

/// At the floor, idle cells stay open forever.
#[test]
fn test_floor_board_never_evicts() {
    let config = GameConfig::default();
    let mut state = open_cells(&[0, 5, 10, 15], 10_000);

    for _ in 0..60 {
        state = apply(&state, 0, GameAction::Inc, &config);
    }

    assert_eq!(state.unblocked_indexes(), vec![0, 5, 10, 15]);
}

/// Touching a cell resets its idle clock.
#[test]
fn test_touch_resets_idle_clock() {
    let config = GameConfig::default();
    let mut state = open_cells(&[0, 1, 2, 3, 15], 10_000);
    state.next_fib = 1597;

    for _ in 0..6 {
        state = apply(&state, 15, GameAction::Inc, &config);
    }
    // Move 7 touches cell 0 only.
    state = apply(&state, 0, GameAction::Inc, &config);
    for _ in 0..4 {
        state = apply(&state, 15, GameAction::Inc, &config);
    }

    // Move 12: cells 1, 2, 3 are 12 moves idle, cell 0 only 5.
    let r = resolve(&state, 15, GameAction::Inc, &config);
    match r.outcome {
        Outcome::Applied(summary) => assert_eq!(summary.auto_blocked, Some(1)),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(!r.state.grid[0].blocked);
}

// =============================================================================
// Running Out of Score
// =============================================================================

/// A game that bleeds score ends, absorbs everything, and undo revives it.
#[test]
fn test_game_over_and_recovery() {
    let config = GameConfig::default()
        .with_costs(ActionCosts::new(50, 50, 50, 50))
        .with_fib_bonus(0);
    let s0 = open_cells(&[0, 1, 2, 3], 100);

    let s1 = apply(&s0, 0, GameAction::Inc, &config);
    assert_eq!(s1.score, 52);
    let s2 = apply(&s1, 0, GameAction::Inc, &config);
    assert_eq!(s2.score, 5);

    let over = apply(&s2, 0, GameAction::Inc, &config);
    assert!(over.game_over);
    assert_eq!(over.score, 5);
    assert_eq!(over.move_number, 2);

    for action in GameAction::ALL {
        assert_eq!(apply(&over, 1, action, &config), over);
    }

    let revived = undo(&over);
    assert!(!revived.game_over);
    assert_eq!(revived, s1);
}

// =============================================================================
// Fibonacci Ladder
// =============================================================================

/// Climbing the ladder pays each target exactly once, in order.
#[test]
fn test_ladder_climb() {
    let config = GameConfig::default().with_fib_bonus(10);
    let mut state = open_cells(&[0, 5, 10, 15], 10_000);

    for _ in 0..20 {
        state = apply(&state, 0, GameAction::Inc, &config);
    }

    // Cell 0 went 1 -> 21, passing 2, 3, 5, 8, 13, 21 in order.
    assert_eq!(state.grid[0].value, 21);
    assert_eq!(state.achieved_fibs, vec![1, 2, 3, 5, 8, 13, 21]);
    assert_eq!(state.next_fib, 34);
    assert_eq!(state.best_fib, 21);

    let paid: u64 = (2..=21).sum::<u64>() + 6 * 10;
    assert_eq!(state.score, 10_000 - 20 * 5 + paid);
}

/// Undo puts a paid target back on the ladder.
#[test]
fn test_undo_reverts_bonus() {
    let config = GameConfig::default();
    let s0 = open_cells(&[0, 5, 10, 15], 100);

    let s1 = apply(&s0, 0, GameAction::Inc, &config);
    assert_eq!(s1.next_fib, 3);

    let back = undo(&s1);
    assert_eq!(back.next_fib, 2);
    assert_eq!(back.achieved_fibs, vec![1]);

    let again = apply(&back, 0, GameAction::Inc, &config);
    assert_eq!(again, s1);
}
