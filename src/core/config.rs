//! Game configuration types.
//!
//! Callers supply configuration; the engine never mutates it and never
//! falls back to a global default. Every operation takes `&GameConfig`.
//!
//! - `ActionCosts`: Score cost of each action kind
//! - `AutoBlockConfig`: Idle eviction thresholds
//! - `CostScaling`: Fixed or counter-driven escalating costs
//! - `GameConfig`: Combines all configuration
//! - `Difficulty`: Built-in presets

use serde::{Deserialize, Serialize};

use super::action::{ActionCounters, GameAction};
use crate::error::ConfigError;

/// Base cost of each action kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCosts {
    pub inc: u64,
    pub sum: u64,
    pub mul: u64,
    pub unblock: u64,
}

impl ActionCosts {
    /// Create a cost table.
    #[must_use]
    pub const fn new(inc: u64, sum: u64, mul: u64, unblock: u64) -> Self {
        Self { inc, sum, mul, unblock }
    }

    /// Base cost of an action, before any scaling.
    #[must_use]
    pub const fn of(&self, action: GameAction) -> u64 {
        match action {
            GameAction::Inc => self.inc,
            GameAction::Sum => self.sum,
            GameAction::Mul => self.mul,
            GameAction::Unblock => self.unblock,
        }
    }
}

/// Population control for unblocked cells.
///
/// After every action, if more than `safety_floor` cells are unblocked, the
/// cell idle the longest (at least `idle_threshold` moves) is blocked again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutoBlockConfig {
    /// Moves a cell may go untouched before it can be evicted.
    pub idle_threshold: u32,

    /// Eviction never brings the unblocked count to this value or below.
    pub safety_floor: usize,
}

impl Default for AutoBlockConfig {
    fn default() -> Self {
        Self {
            idle_threshold: 12,
            safety_floor: 4,
        }
    }
}

/// How action costs evolve over a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostScaling {
    /// Costs never change.
    #[default]
    Fixed,

    /// INC/SUM/MUL cost `base * (1 + uses / every)`, where `uses` counts
    /// earlier actions of the same kind. UNBLOCK never escalates.
    Escalating { every: u32 },
}

impl CostScaling {
    /// Multiplier applied to the base cost of `action` given prior uses.
    #[must_use]
    pub fn multiplier(self, action: GameAction, counters: &ActionCounters) -> u64 {
        match self {
            CostScaling::Fixed => 1,
            CostScaling::Escalating { every } => match counters.get(action) {
                Some(uses) if every > 0 => 1 + u64::from(uses / every),
                _ => 1,
            },
        }
    }
}

/// Built-in difficulty presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Cost table for this difficulty.
    #[must_use]
    pub const fn costs(self) -> ActionCosts {
        match self {
            Difficulty::Easy => ActionCosts::new(2, 3, 5, 20),
            Difficulty::Normal => ActionCosts::new(5, 5, 12, 50),
            Difficulty::Hard => ActionCosts::new(8, 10, 15, 75),
        }
    }

    /// Full configuration for this difficulty.
    #[must_use]
    pub fn config(self) -> GameConfig {
        GameConfig {
            costs: self.costs(),
            ..GameConfig::base()
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid side length; the grid holds `size * size` cells.
    pub size: usize,

    /// Base action costs.
    pub costs: ActionCosts,

    /// Score at the start of a game.
    pub start_score: u64,

    /// Cells unblocked at the start of a game.
    pub start_unblocked: usize,

    /// Bonus paid when a result hits the current Fibonacci target.
    pub fib_bonus: u64,

    /// Idle eviction thresholds.
    pub auto_block: AutoBlockConfig,

    /// Fixed or escalating costs.
    pub cost_scaling: CostScaling,

    /// Number of moves the undo history retains.
    pub undo_depth: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::Normal.config()
    }
}

impl GameConfig {
    fn base() -> Self {
        Self {
            size: 4,
            costs: Difficulty::Normal.costs(),
            start_score: 100,
            start_unblocked: 4,
            fib_bonus: 100,
            auto_block: AutoBlockConfig::default(),
            cost_scaling: CostScaling::Fixed,
            undo_depth: 32,
        }
    }

    /// Number of cells in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Set the grid side length.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the cost table.
    #[must_use]
    pub fn with_costs(mut self, costs: ActionCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_start_score(mut self, score: u64) -> Self {
        self.start_score = score;
        self
    }

    /// Set how many cells start unblocked.
    #[must_use]
    pub fn with_start_unblocked(mut self, count: usize) -> Self {
        self.start_unblocked = count;
        self
    }

    /// Set the Fibonacci bonus.
    #[must_use]
    pub fn with_fib_bonus(mut self, bonus: u64) -> Self {
        self.fib_bonus = bonus;
        self
    }

    /// Set the auto-block thresholds.
    #[must_use]
    pub fn with_auto_block(mut self, auto_block: AutoBlockConfig) -> Self {
        self.auto_block = auto_block;
        self
    }

    /// Set the cost scaling rule.
    #[must_use]
    pub fn with_cost_scaling(mut self, scaling: CostScaling) -> Self {
        self.cost_scaling = scaling;
        self
    }

    /// Set the undo history depth.
    #[must_use]
    pub fn with_undo_depth(mut self, depth: usize) -> Self {
        self.undo_depth = depth;
        self
    }

    /// Cost of `action` given the lifetime counters so far.
    #[must_use]
    pub fn cost_of(&self, action: GameAction, counters: &ActionCounters) -> u64 {
        self.costs
            .of(action)
            .saturating_mul(self.cost_scaling.multiplier(action, counters))
    }

    /// Check that this configuration can build a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidGridSize(self.size));
        }
        if self.start_unblocked > self.cell_count() {
            return Err(ConfigError::TooManyUnblocked {
                requested: self.start_unblocked,
                capacity: self.cell_count(),
            });
        }
        if self.undo_depth == 0 {
            return Err(ConfigError::ZeroUndoDepth);
        }
        Ok(())
    }
}
