//! Board and dictionary bindings for Python.

use pyo3::prelude::*;

use crate::core::{Board, BoardRng, Cell, Path};
use crate::dictionary::Dictionary;
use crate::generate::BoardGenerator;

pub(crate) fn path_from_tuples(cells: &[(usize, usize)]) -> Path {
    cells.iter().map(|&(row, col)| Cell::new(row, col)).collect()
}

pub(crate) fn path_to_tuples(path: &Path) -> Vec<(usize, usize)> {
    path.iter().map(|cell| (cell.row, cell.col)).collect()
}

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a board from rows of tiles.
    ///
    /// Raises ValueError for ragged rows or empty tiles.
    #[new]
    fn new(rows: Vec<Vec<String>>) -> PyResult<Self> {
        Board::from_rows(rows)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Deal a classic 4x4 board from the standard sixteen dice.
    ///
    /// The same seed always deals the same board.
    #[staticmethod]
    fn classic(seed: u64) -> Self {
        Self(BoardGenerator::classic().generate(&mut BoardRng::new(seed)))
    }

    /// Grid height in rows.
    #[getter]
    fn rows(&self) -> usize {
        self.0.rows()
    }

    /// Grid width in columns.
    #[getter]
    fn cols(&self) -> usize {
        self.0.cols()
    }

    /// Get the tile at (row, col), or None when off the board.
    fn tile(&self, row: usize, col: usize) -> Option<String> {
        self.0.get(Cell::new(row, col)).map(str::to_string)
    }

    /// In-bounds coordinates adjacent to (row, col), in scan order.
    fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        self.0
            .neighbors(Cell::new(row, col))
            .iter()
            .map(|cell| (cell.row, cell.col))
            .collect()
    }

    /// The word a path spells, or None if any cell is off the board.
    fn spell(&self, path: Vec<(usize, usize)>) -> Option<String> {
        self.0.spell(&path_from_tuples(&path))
    }

    fn __repr__(&self) -> String {
        format!("Board({}x{})", self.0.rows(), self.0.cols())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Dictionary.
#[pyclass(name = "Dictionary")]
#[derive(Clone, Debug)]
pub struct PyDictionary(pub Dictionary);

#[pymethods]
impl PyDictionary {
    /// Create a dictionary from a list of words.
    #[new]
    fn new(words: Vec<String>) -> Self {
        Self(Dictionary::from_words(words))
    }

    /// Load a dictionary from a whitespace-separated word file.
    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        Ok(Self(Dictionary::from_file(path)?))
    }

    /// Whether the exact word is present. Matching is case sensitive.
    fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Keep only words whose letters all appear on the board.
    fn filter_feasible(&self, board: &PyBoard) -> Self {
        Self(self.0.filter_feasible(&board.0))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __contains__(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    fn __repr__(&self) -> String {
        format!("Dictionary({} words)", self.0.len())
    }
}
