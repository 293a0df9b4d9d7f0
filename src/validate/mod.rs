//! Validation of externally-supplied paths.
//!
//! Players trace paths by hand, so unlike engine-produced paths they can
//! be empty, wander off the board, jump, or cross themselves. Validation
//! walks the path once in order and reports the first violation as a
//! discriminated [`PathError`], or returns the spelled word on success.
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::core::{Board, Cell, Path};
//! use boggle_engine::dictionary::Dictionary;
//! use boggle_engine::validate::{validate_path, PathError};
//!
//! let board = Board::from_letters(&["CA", "TS"]).unwrap();
//! let dict = Dictionary::from_words(["CAT", "CATS", "AT"]);
//!
//! let path = Path::from_cells([Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
//! assert_eq!(validate_path(&board, &path, &dict).unwrap(), "CAT");
//!
//! let cross = Path::from_cells([Cell::new(0, 0), Cell::new(1, 1), Cell::new(0, 0)]);
//! assert!(matches!(
//!     validate_path(&board, &cross, &dict),
//!     Err(PathError::RepeatedCell { index: 2, .. })
//! ));
//! ```

use crate::core::{Board, Cell, Path};
use crate::dictionary::Dictionary;

/// Why a submitted path was rejected.
///
/// Checks run in path order, one pass; the error names the first
/// violation encountered. All variants are ordinary negative results,
/// never a reason to tear a session down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The path has no cells.
    Empty,
    /// A cell lies outside the board.
    OutOfBounds {
        /// Position in the path of the offending cell.
        index: usize,
        /// The offending cell.
        cell: Cell,
    },
    /// Two consecutive cells are not within one king-move.
    NonAdjacentStep {
        /// Position in the path of the second cell of the pair.
        index: usize,
        /// First cell of the pair.
        from: Cell,
        /// Second cell of the pair.
        to: Cell,
    },
    /// A cell appears more than once in the path.
    RepeatedCell {
        /// Position in the path of the second occurrence.
        index: usize,
        /// The revisited cell.
        cell: Cell,
    },
    /// The path is geometrically sound but spells nothing in the
    /// dictionary.
    NotAWord {
        /// The word the path spells.
        word: String,
    },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::OutOfBounds { index, cell } => {
                write!(f, "cell {cell} at position {index} is off the board")
            }
            Self::NonAdjacentStep { index, from, to } => {
                write!(
                    f,
                    "step to position {index} jumps from {from} to non-adjacent {to}"
                )
            }
            Self::RepeatedCell { index, cell } => {
                write!(f, "cell {cell} is used again at position {index}")
            }
            Self::NotAWord { word } => write!(f, "{word:?} is not in the dictionary"),
        }
    }
}

impl std::error::Error for PathError {}

/// Check a submitted path and return the word it spells.
///
/// Verifies, in order: the path is non-empty, every cell is on the
/// board, every step moves to an adjacent cell, no cell is revisited,
/// and the concatenated tiles form a dictionary word. Pure; neither
/// board nor dictionary is touched.
pub fn validate_path(
    board: &Board,
    path: &Path,
    dictionary: &Dictionary,
) -> Result<String, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let mut word = String::new();
    let mut previous: Option<Cell> = None;
    for (index, cell) in path.iter().enumerate() {
        let Some(tile) = board.get(cell) else {
            return Err(PathError::OutOfBounds { index, cell });
        };
        if let Some(from) = previous {
            if !from.is_adjacent(cell) {
                return Err(PathError::NonAdjacentStep {
                    index,
                    from,
                    to: cell,
                });
            }
        }
        if path.cells()[..index].contains(&cell) {
            return Err(PathError::RepeatedCell { index, cell });
        }
        word.push_str(tile);
        previous = Some(cell);
    }

    if dictionary.contains(&word) {
        Ok(word)
    } else {
        Err(PathError::NotAWord { word })
    }
}
