//! Rectangular letter-tile grids.
//!
//! A [`Board`] is an R×C grid of non-empty tile strings, immutable once
//! constructed. Most tiles are single letters; a tile may carry several
//! characters (the classic dice have a "QU" face), which is why tiles are
//! strings and why path length and word length can differ.
//!
//! Degenerate boards (zero rows, or rows of zero width) are valid values:
//! they have no cells, so every search over them is empty. Construction
//! only rejects shapes that would corrupt indexing, ragged rows and empty
//! tile strings.
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::core::{Board, Cell};
//!
//! let board = Board::from_rows(vec![
//!     vec!["C", "A"],
//!     vec!["T", "S"],
//! ]).unwrap();
//!
//! assert_eq!(board.rows(), 2);
//! assert_eq!(board.cols(), 2);
//! assert_eq!(&board[Cell::new(1, 0)], "T");
//!
//! // A corner cell has three in-bounds neighbors
//! assert_eq!(board.neighbors(Cell::new(0, 0)).len(), 3);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Cell, Path};

/// Rejected board shapes.
///
/// Only construction can fail; a constructed board always satisfies the
/// grid invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A row's width differs from the first row's width.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A tile string is empty.
    EmptyTile {
        /// Position of the empty tile.
        cell: Cell,
    },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} tiles, expected {expected} to match the first row"
            ),
            Self::EmptyTile { cell } => write!(f, "tile at {cell} is empty"),
        }
    }
}

impl std::error::Error for BoardError {}

/// An R×C grid of letter tiles, stored flattened in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<String>,
}

impl Board {
    /// Build a board from rows of tile strings.
    ///
    /// Every row must have the same width as the first, and every tile
    /// must be non-empty. An empty row set is allowed and yields a board
    /// with no cells.
    ///
    /// ```
    /// use boggle_engine::core::Board;
    ///
    /// let board = Board::from_rows(vec![vec!["A", "B"], vec!["C", "D"]]).unwrap();
    /// assert_eq!(board.cell_count(), 4);
    ///
    /// assert!(Board::from_rows(vec![vec!["A"], vec!["B", "C"]]).is_err());
    /// ```
    pub fn from_rows<R, T>(rows: R) -> Result<Self, BoardError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut cols = None;
        let mut tiles = Vec::new();
        let mut row_count = 0;

        for (row_index, row) in rows.into_iter().enumerate() {
            row_count += 1;
            let start = tiles.len();
            for tile in row {
                tiles.push(tile.into());
            }
            let width = tiles.len() - start;

            let expected = *cols.get_or_insert(width);
            if width != expected {
                return Err(BoardError::RaggedRows {
                    row: row_index,
                    expected,
                    found: width,
                });
            }
            for (col, tile) in tiles[start..].iter().enumerate() {
                if tile.is_empty() {
                    return Err(BoardError::EmptyTile {
                        cell: Cell::new(row_index, col),
                    });
                }
            }
        }

        let cols = cols.unwrap_or(0);
        Ok(Self {
            rows: row_count,
            cols,
            tiles,
        })
    }

    /// Build a board from string rows, one character per tile.
    ///
    /// A convenience for tests and fixtures; multi-character tiles need
    /// [`Board::from_rows`].
    ///
    /// ```
    /// use boggle_engine::core::{Board, Cell};
    ///
    /// let board = Board::from_letters(&["CAT", "DOG"]).unwrap();
    /// assert_eq!(&board[Cell::new(0, 2)], "T");
    /// ```
    pub fn from_letters(rows: &[&str]) -> Result<Self, BoardError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.chars().map(String::from).collect::<Vec<_>>()),
        )
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (rows × cols).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Whether a cell lies on this board.
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The tile at a cell, or `None` when the cell is out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&str> {
        if self.in_bounds(cell) {
            Some(self.tiles[cell.row * self.cols + cell.col].as_str())
        } else {
            None
        }
    }

    /// All cells in row-major order.
    ///
    /// This is the canonical traversal order; searches start branches from
    /// cells in this order so runs are reproducible.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// In-bounds neighbors of a cell, in fixed offset order.
    ///
    /// A center cell has 8, an edge cell 5, a corner 3. The cell itself is
    /// never included.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        Cell::NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&delta| cell.offset(delta))
            .filter(|&next| self.in_bounds(next))
            .collect()
    }

    /// Every character appearing on any tile.
    ///
    /// This is the alphabet a word must draw from to have any chance of
    /// being spelled here; the dictionary prefilter is built on it.
    #[must_use]
    pub fn letter_set(&self) -> FxHashSet<char> {
        self.tiles.iter().flat_map(|tile| tile.chars()).collect()
    }

    /// Concatenate the tiles along a path into a word.
    ///
    /// Returns `None` when any cell of the path is out of bounds. No
    /// adjacency or repetition checks happen here; `validate_path` owns
    /// those.
    #[must_use]
    pub fn spell(&self, path: &Path) -> Option<String> {
        let mut word = String::new();
        for cell in path.iter() {
            word.push_str(self.get(cell)?);
        }
        Some(word)
    }
}

impl std::ops::Index<Cell> for Board {
    type Output = str;

    /// Panics when the cell is out of bounds; use [`Board::get`] for
    /// fallible access.
    fn index(&self, cell: Cell) -> &str {
        match self.get(cell) {
            Some(tile) => tile,
            None => panic!(
                "cell {cell} out of bounds for {}x{} board",
                self.rows, self.cols
            ),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.tiles[row * self.cols + col])?;
            }
        }
        Ok(())
    }
}
