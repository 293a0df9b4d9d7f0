//! Search, validation, and session bindings for Python.

use std::collections::HashMap;

use pyo3::prelude::*;

use crate::dictionary::PrefixIndex;
use crate::search::{LengthTarget, PathSearch};
use crate::session::GameSession;
use crate::solver;
use crate::validate::validate_path;

use super::py_core::{path_from_tuples, path_to_tuples, PyBoard, PyDictionary};

/// Python wrapper for GameSession.
#[pyclass(name = "Session")]
pub struct PySession(pub GameSession);

#[pymethods]
impl PySession {
    /// Start a session over a board and dictionary. Computes the full
    /// solution up front.
    #[new]
    fn new(board: &PyBoard, dictionary: &PyDictionary) -> Self {
        Self(GameSession::new(board.0.clone(), dictionary.0.clone()))
    }

    /// Submit a traced path as a list of (row, col) tuples.
    ///
    /// Returns (word, score) on acceptance; raises ValueError when the
    /// path is rejected or the word was already found.
    fn submit(&mut self, path: Vec<(usize, usize)>) -> PyResult<(String, u32)> {
        match self.0.submit(&path_from_tuples(&path)) {
            Ok(accepted) => Ok((accepted.word, accepted.score)),
            Err(err) => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                err.to_string(),
            )),
        }
    }

    /// Points accumulated so far.
    #[getter]
    fn score(&self) -> u64 {
        self.0.score()
    }

    /// The score ceiling for this board.
    #[getter]
    fn max_score(&self) -> u64 {
        self.0.max_score()
    }

    /// Words found so far, sorted.
    fn found_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.0.found_words().map(str::to_string).collect();
        words.sort_unstable();
        words
    }

    /// Reachable words not found yet, sorted.
    fn remaining_words(&self) -> Vec<String> {
        self.0
            .remaining_words()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Whether every reachable word has been found.
    fn found_all_words(&self) -> bool {
        self.0.found_all_words()
    }

    /// Whether the score ceiling has been reached.
    fn reached_max_score(&self) -> bool {
        self.0.reached_max_score()
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(score={}/{}, words={})",
            self.0.score(),
            self.0.max_score(),
            self.0.found_count()
        )
    }
}

/// All paths of exactly `n` cells that spell dictionary words.
#[pyfunction]
pub fn find_length_n_paths(
    n: usize,
    board: &PyBoard,
    dictionary: &PyDictionary,
) -> Vec<Vec<(usize, usize)>> {
    let index = PrefixIndex::from_dictionary(&dictionary.0);
    let mut search = PathSearch::new(&board.0, &index);
    search
        .find_paths(LengthTarget::PathCells(n))
        .iter()
        .map(path_to_tuples)
        .collect()
}

/// All paths spelling dictionary words of exactly `n` letters.
#[pyfunction]
pub fn find_length_n_words(
    n: usize,
    board: &PyBoard,
    dictionary: &PyDictionary,
) -> Vec<Vec<(usize, usize)>> {
    let index = PrefixIndex::from_dictionary(&dictionary.0);
    let mut search = PathSearch::new(&board.0, &index);
    search
        .find_paths(LengthTarget::WordChars(n))
        .iter()
        .map(path_to_tuples)
        .collect()
}

/// Best-scoring path per reachable word, as a dict of word to path.
#[pyfunction]
pub fn max_score_paths(
    board: &PyBoard,
    dictionary: &PyDictionary,
) -> HashMap<String, Vec<(usize, usize)>> {
    solver::max_score_paths(&board.0, &dictionary.0)
        .iter()
        .map(|(word, path)| (word.to_string(), path_to_tuples(path)))
        .collect()
}

/// Validate a traced path.
///
/// Returns the word the path spells; raises ValueError naming the
/// first violation otherwise.
#[pyfunction]
pub fn is_valid_path(
    board: &PyBoard,
    path: Vec<(usize, usize)>,
    dictionary: &PyDictionary,
) -> PyResult<String> {
    validate_path(&board.0, &path_from_tuples(&path), &dictionary.0)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}
