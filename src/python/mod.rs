//! Python bindings for the boggle-engine word search crate.
//!
//! This module provides PyO3 bindings for driving boards, searches,
//! and play sessions from Python.
//!
//! # Quick Start
//!
//! ```python
//! import boggle_engine as boggle
//!
//! board = boggle.Board([["C", "A"], ["T", "S"]])
//! words = boggle.Dictionary(["CAT", "CATS", "AT"])
//!
//! # One-shot queries
//! best = boggle.max_score_paths(board, words)
//! assert best["CATS"] == [(0, 0), (0, 1), (1, 0), (1, 1)]
//!
//! # Interactive play
//! session = boggle.Session(board, words)
//! word, score = session.submit([(0, 0), (0, 1), (1, 0)])
//! assert (word, score) == ("CAT", 9)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// boggle-engine: exhaustive word search over letter grids.
///
/// This module provides:
/// - Board and dictionary construction
/// - Fixed-length path search and path validation
/// - Max-score solving
/// - Scored play sessions with once-per-word bookkeeping
#[pymodule]
fn boggle_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyBoard>()?;
    m.add_class::<PyDictionary>()?;

    // Sessions
    m.add_class::<PySession>()?;

    // One-shot queries
    m.add_function(wrap_pyfunction!(find_length_n_paths, m)?)?;
    m.add_function(wrap_pyfunction!(find_length_n_words, m)?)?;
    m.add_function(wrap_pyfunction!(max_score_paths, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_path, m)?)?;

    Ok(())
}
