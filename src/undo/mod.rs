//! Undo over the bounded move history.
//!
//! Every applied move records a snapshot of the state before it. `undo`
//! restores the newest snapshot together with the history that preceded
//! it, so calling `undo` again keeps walking back. The history holds at
//! most `GameConfig::undo_depth` moves; older moves are forgotten.

use tracing::debug;

use crate::core::GameState;

/// Roll back the most recent move.
///
/// Returns the state unchanged when there is nothing to undo. Works on a
/// finished game too: the restored snapshot is the last playable state.
#[must_use]
pub fn undo(state: &GameState) -> GameState {
    match state.take_last_move() {
        None => state.clone(),
        Some((record, history)) => {
            debug!(
                action = %record.action,
                index = record.clicked_index,
                remaining = history.len(),
                "move undone"
            );
            GameState::from_snapshot(record.prev_state, history)
        }
    }
}
