//! Grid geometry.
//!
//! Cells are stored row-major. A cell's neighborhood is the 3x3 block
//! centered on it, clipped at the edges, minus any blocked cell:
//!
//! ```
//! use fib_grid::core::{Cell, Grid};
//! use fib_grid::grid::neighbor_indexes;
//!
//! let grid = Grid::from_cells(4, vec![Cell::open(1); 16]);
//! assert_eq!(neighbor_indexes(0, &grid).as_slice(), &[0, 1, 4, 5]);
//! assert_eq!(neighbor_indexes(5, &grid).len(), 9);
//! ```

mod geometry;

pub use geometry::{clone_grid, neighbor_indexes, to_index, to_row_col, Neighborhood};
