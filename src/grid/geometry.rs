//! Index mapping and neighborhood resolution.

use smallvec::SmallVec;

use crate::core::Grid;

/// Indexes of a neighborhood. At most nine, so never heap-allocated.
pub type Neighborhood = SmallVec<[usize; 9]>;

/// Convert a row-major index to `(row, col)`.
#[must_use]
pub const fn to_row_col(index: usize, size: usize) -> (usize, usize) {
    (index / size, index % size)
}

/// Convert `(row, col)` to a row-major index.
#[must_use]
pub const fn to_index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// Unblocked cells in the 3x3 block centered on `index`.
///
/// The block is clipped at the edges (corner 4, edge 6, interior 9 before
/// blocked cells are removed). A blocked target is excluded like any other
/// blocked cell. Indexes come out in row-major order. An out-of-range
/// `index` has no neighborhood.
#[must_use]
pub fn neighbor_indexes(index: usize, grid: &Grid) -> Neighborhood {
    let mut out = Neighborhood::new();
    let size = grid.size();
    if index >= grid.len() {
        return out;
    }

    let (row, col) = to_row_col(index, size);
    for r in row.saturating_sub(1)..=(row + 1).min(size - 1) {
        for c in col.saturating_sub(1)..=(col + 1).min(size - 1) {
            let n = to_index(r, c, size);
            if !grid[n].blocked {
                out.push(n);
            }
        }
    }
    out
}

/// Fully independent copy of a grid.
///
/// Cells are plain values, so the copy shares nothing with the original.
#[must_use]
pub fn clone_grid(grid: &Grid) -> Grid {
    grid.clone()
}
