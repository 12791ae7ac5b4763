//! Player actions and move records.
//!
//! An action is a verb applied to one cell. `MoveRecord` pairs the action
//! with a snapshot of the state it was applied to, which is what undo
//! restores.

use serde::{Deserialize, Serialize};

use super::state::StateSnapshot;

/// Action a player can take on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Add one to an unblocked cell.
    Inc,
    /// Replace an unblocked cell with the sum of its neighborhood.
    Sum,
    /// Replace an unblocked cell with the product of its neighborhood.
    Mul,
    /// Open a blocked cell with value 1.
    Unblock,
}

impl GameAction {
    /// All actions, in display order.
    pub const ALL: [GameAction; 4] = [
        GameAction::Inc,
        GameAction::Sum,
        GameAction::Mul,
        GameAction::Unblock,
    ];

    /// Whether this action targets blocked cells (as opposed to open ones).
    #[must_use]
    pub const fn targets_blocked(self) -> bool {
        matches!(self, GameAction::Unblock)
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameAction::Inc => "INC",
            GameAction::Sum => "SUM",
            GameAction::Mul => "MUL",
            GameAction::Unblock => "UNBLOCK",
        };
        f.write_str(name)
    }
}

/// Lifetime count of each counted action kind. UNBLOCK is not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCounters {
    pub inc: u32,
    pub sum: u32,
    pub mul: u32,
}

impl ActionCounters {
    /// Count for an action kind, `None` for UNBLOCK.
    #[must_use]
    pub const fn get(&self, action: GameAction) -> Option<u32> {
        match action {
            GameAction::Inc => Some(self.inc),
            GameAction::Sum => Some(self.sum),
            GameAction::Mul => Some(self.mul),
            GameAction::Unblock => None,
        }
    }

    /// Record one use of `action`. UNBLOCK leaves the counters unchanged.
    pub fn record(&mut self, action: GameAction) {
        match action {
            GameAction::Inc => self.inc += 1,
            GameAction::Sum => self.sum += 1,
            GameAction::Mul => self.mul += 1,
            GameAction::Unblock => {}
        }
    }

    /// Total counted actions.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.inc + self.sum + self.mul
    }
}

/// One applied move, kept for undo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The action taken.
    pub action: GameAction,

    /// The cell it was applied to.
    pub clicked_index: usize,

    /// Independent copy of the state immediately before the move.
    pub prev_state: StateSnapshot,
}
