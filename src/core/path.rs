//! Ordered cell sequences and their scores.
//!
//! A [`Path`] is the ordered list of cells a word is traced along. Paths
//! produced by the search always satisfy the chain invariant (consecutive
//! cells adjacent, no cell repeated); paths handed in from outside may
//! not, which is what `validate_path` is for.
//!
//! Scoring is the square of the cell count: a 3-cell word scores 9, a
//! 4-cell word 16. Longer traces are always worth strictly more, which is
//! what lets the selector sweep lengths in ascending order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Cell;

/// An ordered sequence of board cells.
///
/// Backed by a `SmallVec` sized for a full classic 4×4 board, so typical
/// paths never touch the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    cells: SmallVec<[Cell; 16]>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from cells in order.
    #[must_use]
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Number of cells in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append a cell.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Remove and return the last cell.
    pub fn pop(&mut self) -> Option<Cell> {
        self.cells.pop()
    }

    /// First cell, if any.
    #[must_use]
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Last cell, if any.
    #[must_use]
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether the path passes through a cell.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Cells in order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// The cells as a slice.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Score for this path: cell count squared.
    ///
    /// ```
    /// use boggle_engine::core::{Cell, Path};
    ///
    /// let path = Path::from_cells([Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
    /// assert_eq!(path.score(), 9);
    /// ```
    #[must_use]
    pub fn score(&self) -> u32 {
        (self.cells.len() as u32).pow(2)
    }

    /// Whether the path satisfies the chain invariant: every consecutive
    /// pair adjacent, every pair distinct, no cell repeated.
    ///
    /// Engine-produced paths always do; this exists for assertions and
    /// for callers building paths by hand. The empty path is a chain.
    #[must_use]
    pub fn is_chain(&self) -> bool {
        for pair in self.cells.windows(2) {
            if pair[0] == pair[1] || !pair[0].is_adjacent(pair[1]) {
                return false;
            }
        }
        for (i, &cell) in self.cells.iter().enumerate() {
            if self.cells[..i].contains(&cell) {
                return false;
            }
        }
        true
    }
}

impl FromIterator<Cell> for Path {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self::from_cells(cells)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn test_push_pop() {
        let mut path = Path::new();
        assert!(path.is_empty());

        path.push(cell(0, 0));
        path.push(cell(0, 1));
        assert_eq!(path.len(), 2);
        assert_eq!(path.first(), Some(cell(0, 0)));
        assert_eq!(path.last(), Some(cell(0, 1)));

        assert_eq!(path.pop(), Some(cell(0, 1)));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_contains() {
        let path = Path::from_cells([cell(0, 0), cell(1, 1)]);
        assert!(path.contains(cell(0, 0)));
        assert!(path.contains(cell(1, 1)));
        assert!(!path.contains(cell(0, 1)));
    }

    #[test]
    fn test_scores_are_squared_lengths() {
        assert_eq!(Path::new().score(), 0);
        assert_eq!(Path::from_cells([cell(0, 0)]).score(), 1);
        assert_eq!(Path::from_cells([cell(0, 0), cell(0, 1)]).score(), 4);
        assert_eq!(
            Path::from_cells([cell(0, 0), cell(0, 1), cell(1, 0), cell(1, 1)]).score(),
            16
        );
    }

    #[test]
    fn test_is_chain_accepts_valid() {
        let path = Path::from_cells([cell(0, 0), cell(0, 1), cell(1, 0), cell(1, 1)]);
        assert!(path.is_chain());
        assert!(Path::new().is_chain());
        assert!(Path::from_cells([cell(3, 3)]).is_chain());
    }

    #[test]
    fn test_is_chain_rejects_gap() {
        let path = Path::from_cells([cell(0, 0), cell(0, 2)]);
        assert!(!path.is_chain());
    }

    #[test]
    fn test_is_chain_rejects_repeat() {
        let path = Path::from_cells([cell(0, 0), cell(0, 1), cell(0, 0)]);
        assert!(!path.is_chain());
    }

    #[test]
    fn test_is_chain_rejects_stationary_step() {
        let path = Path::from_cells([cell(0, 0), cell(0, 0)]);
        assert!(!path.is_chain());
    }

    #[test]
    fn test_display() {
        let path = Path::from_cells([cell(0, 0), cell(0, 1), cell(1, 0)]);
        assert_eq!(format!("{path}"), "(0, 0) -> (0, 1) -> (1, 0)");
    }

    #[test]
    fn test_from_iterator() {
        let path: Path = [cell(0, 0), cell(1, 1)].into_iter().collect();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_serialization() {
        let path = Path::from_cells([cell(0, 0), cell(0, 1)]);
        let json = serde_json::to_string(&path).unwrap();
        let deserialized: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, deserialized);
    }
}
