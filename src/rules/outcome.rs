//! What a transition did, for observers.

use serde::{Deserialize, Serialize};

use crate::core::{GameAction, GameState};
use crate::grid::Neighborhood;

/// Details of an applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// The action taken.
    pub action: GameAction,

    /// The cell it was applied to.
    pub index: usize,

    /// Score deducted.
    pub cost: u64,

    /// Value written to the target cell and credited to the score.
    pub result_value: u64,

    /// Fibonacci bonus paid, zero if the target was missed.
    pub bonus: u64,

    /// Whether the result hit the Fibonacci target. Set even when the
    /// configured bonus is zero.
    pub target_hit: bool,

    /// Score before the move.
    pub score_before: u64,

    /// Score after the move, with credits saturated at `u64::MAX`.
    pub score_after: u64,

    /// Neighbors reset to 1 by SUM/MUL, excluding the target.
    pub reset_cells: Neighborhood,

    /// Cell re-blocked for idling, if any.
    pub auto_blocked: Option<usize>,
}

impl MoveSummary {
    /// Whether this move hit the Fibonacci target.
    #[must_use]
    pub fn bonus_awarded(&self) -> bool {
        self.target_hit
    }

    /// Net score change as applied, after saturation.
    #[must_use]
    pub fn score_change(&self) -> i128 {
        i128::from(self.score_after) - i128::from(self.score_before)
    }
}

/// How a call to `resolve` ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game was already over; nothing changed.
    Absorbed,

    /// The action does not apply to that cell; nothing changed.
    NotApplicable,

    /// The action was unaffordable and ended the game.
    GameOver { cost: u64 },

    /// The move was applied.
    Applied(MoveSummary),
}

impl Outcome {
    /// Whether the state changed at all.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        matches!(self, Outcome::GameOver { .. } | Outcome::Applied(_))
    }
}

/// New state plus what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub state: GameState,
    pub outcome: Outcome,
}

/// Predicted effect of an action, computed without applying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Value the target would end up with.
    pub result: u64,

    /// Neighbors that would be reset to 1.
    pub resets: usize,

    /// Cost at the current counters.
    pub cost: u64,

    /// Whether the current score covers the cost.
    pub affordable: bool,
}
