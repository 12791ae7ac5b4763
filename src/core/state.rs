//! Game state: the grid, the score ladder and the undo history.
//!
//! ## StateSnapshot
//!
//! Everything a move can change:
//! - Grid cells (blocked flag, value, last touch)
//! - Score, best and next Fibonacci values, achieved targets
//! - Action counters, move number, game-over flag
//!
//! ## GameState
//!
//! A snapshot's fields plus a bounded history of `MoveRecord`s. The history
//! is an `im` vector, so cloning a state shares the recorded snapshots
//! instead of copying them. Recorded snapshots are immutable once stored.

use std::ops::{Index, IndexMut};

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionCounters, MoveRecord};
use crate::error::ConfigError;

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Blocked cells take no part in neighborhoods and only accept UNBLOCK.
    pub blocked: bool,

    /// Current value.
    pub value: u64,

    /// Move number at which the value was last written.
    pub last_touched_move: u32,
}

impl Cell {
    /// A blocked cell, as laid down before the starting cells are opened.
    pub const BLOCKED: Cell = Cell {
        blocked: true,
        value: 0,
        last_touched_move: 0,
    };

    /// An unblocked cell holding `value`, last touched at move 0.
    #[must_use]
    pub const fn open(value: u64) -> Self {
        Self {
            blocked: false,
            value,
            last_touched_move: 0,
        }
    }

    /// Set the move at which this cell was last touched.
    #[must_use]
    pub const fn touched_at(mut self, move_number: u32) -> Self {
        self.last_touched_move = move_number;
        self
    }
}

/// Square grid of cells stored row-major.
///
/// The length is fixed at `size * size` for the life of a game.
/// Deserialization rejects any other length.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a `Grid`.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, ConfigError> {
        Grid::try_from_cells(raw.size, raw.cells)
    }
}

impl Grid {
    /// Create a fully blocked grid.
    #[must_use]
    pub fn blocked(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::BLOCKED; size * size],
        }
    }

    /// Build a grid from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), size * size, "grid must hold size * size cells");
        Self { size, cells }
    }

    /// Build a grid from row-major cells, rejecting a length other than
    /// `size * size`.
    pub fn try_from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, ConfigError> {
        let expected = size.checked_mul(size).unwrap_or(usize::MAX);
        if cells.len() != expected {
            return Err(ConfigError::GridLengthMismatch {
                size,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell, `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Row-major view of the cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate cells in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Indexes of every unblocked cell, ascending.
    pub fn unblocked_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.blocked)
            .map(|(i, _)| i)
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}

/// Every field a move can change. Undo restores one of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub best_fib: u64,
    pub next_fib: u64,
    pub achieved_fibs: Vec<u64>,
    pub counters: ActionCounters,
    pub move_number: u32,
    pub game_over: bool,
}

/// Full game state: a snapshot plus the undo history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub grid: Grid,

    /// Running score; actions cost score and results pay into it.
    pub score: u64,

    /// Largest Fibonacci value ever produced.
    pub best_fib: u64,

    /// Fibonacci value that pays the next bonus.
    pub next_fib: u64,

    /// Targets hit so far, in order. Seeded with `[1]`.
    pub achieved_fibs: Vec<u64>,

    /// Lifetime action counts.
    pub counters: ActionCounters,

    /// Number of state-changing moves applied.
    pub move_number: u32,

    /// Set once the player cannot afford an attempted action.
    pub game_over: bool,

    /// Most recent moves, oldest first.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh state on `grid` with the given score.
    ///
    /// ## Defaults
    ///
    /// - `best_fib`: 1
    /// - `next_fib`: 2
    /// - `achieved_fibs`: [1]
    /// - counters zero, move 0, empty history
    #[must_use]
    pub fn new(grid: Grid, score: u64) -> Self {
        Self {
            grid,
            score,
            best_fib: 1,
            next_fib: 2,
            achieved_fibs: vec![1],
            counters: ActionCounters::default(),
            move_number: 0,
            game_over: false,
            history: Vector::new(),
        }
    }

    /// Rebuild a state from a snapshot and the history preceding it.
    #[must_use]
    pub fn from_snapshot(snapshot: StateSnapshot, history: Vector<MoveRecord>) -> Self {
        let StateSnapshot {
            grid,
            score,
            best_fib,
            next_fib,
            achieved_fibs,
            counters,
            move_number,
            game_over,
        } = snapshot;

        Self {
            grid,
            score,
            best_fib,
            next_fib,
            achieved_fibs,
            counters,
            move_number,
            game_over,
            history,
        }
    }

    /// Independent copy of everything except the history.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            grid: self.grid.clone(),
            score: self.score,
            best_fib: self.best_fib,
            next_fib: self.next_fib,
            achieved_fibs: self.achieved_fibs.clone(),
            counters: self.counters,
            move_number: self.move_number,
            game_over: self.game_over,
        }
    }

    // === History ===

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }

    /// Whether undo would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Append a move, dropping the oldest beyond `depth`.
    pub(crate) fn push_move(&mut self, record: MoveRecord, depth: usize) {
        self.history.push_back(record);
        while self.history.len() > depth {
            self.history.pop_front();
        }
    }

    /// Split off the most recent move.
    pub(crate) fn take_last_move(&self) -> Option<(MoveRecord, Vector<MoveRecord>)> {
        let mut history = self.history.clone();
        let record = history.pop_back()?;
        Some((record, history))
    }

    // === Statistics ===

    /// Number of unblocked cells.
    #[must_use]
    pub fn unblocked_count(&self) -> usize {
        self.grid.unblocked_indexes().count()
    }

    /// Indexes of unblocked cells, ascending.
    #[must_use]
    pub fn unblocked_indexes(&self) -> Vec<usize> {
        self.grid.unblocked_indexes().collect()
    }

    /// Largest value on the board.
    #[must_use]
    pub fn biggest_value(&self) -> u64 {
        self.grid.cells().iter().map(|c| c.value).max().unwrap_or(0)
    }
}
