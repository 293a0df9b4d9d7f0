//! Grid coordinates and adjacency.
//!
//! A [`Cell`] names one position on a board as a 0-indexed `(row, col)`
//! pair. Adjacency is 8-directional: two cells are adjacent when both
//! their row and column differ by at most 1 (Chebyshev distance ≤ 1).
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::core::Cell;
//!
//! let a = Cell::new(0, 0);
//! let b = Cell::new(1, 1);
//!
//! // Diagonal neighbors are adjacent
//! assert!(a.is_adjacent(b));
//!
//! // Adjacency includes the cell itself; path-building layers
//! // exclude equality via their visited tracking
//! assert!(a.is_adjacent(a));
//!
//! assert!(!a.is_adjacent(Cell::new(2, 2)));
//! ```

use serde::{Deserialize, Serialize};

/// A 0-indexed (row, col) position on a board.
///
/// Cells are plain coordinates; whether a cell lies on a particular board
/// is checked by `Board::in_bounds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Cell {
    /// The 8 unit offsets around a cell: orthogonals and diagonals.
    ///
    /// The order is fixed so traversals that expand neighbors in offset
    /// order are reproducible run to run.
    pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    /// Create a cell at the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance to another cell: `max(|Δrow|, |Δcol|)`.
    ///
    /// ```
    /// use boggle_engine::core::Cell;
    ///
    /// assert_eq!(Cell::new(0, 0).chebyshev_distance(Cell::new(1, 1)), 1);
    /// assert_eq!(Cell::new(0, 0).chebyshev_distance(Cell::new(0, 3)), 3);
    /// assert_eq!(Cell::new(2, 2).chebyshev_distance(Cell::new(2, 2)), 0);
    /// ```
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Whether another cell is within one king-move of this one.
    ///
    /// True for the cell itself (distance 0). Callers that need strict
    /// adjacency exclude equality separately, which is how the search
    /// (visited mask) and the validator (repeat check) both handle it.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev_distance(other) <= 1
    }

    /// Step by a signed offset, or `None` if the step would leave the
    /// non-negative grid.
    ///
    /// Bounds against a concrete board are the board's job; this only
    /// guards the underflow edge at row/col 0.
    #[must_use]
    pub fn offset(self, delta: (isize, isize)) -> Option<Self> {
        let row = self.row.checked_add_signed(delta.0)?;
        let col = self.col.checked_add_signed(delta.1)?;
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
