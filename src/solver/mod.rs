//! Max-score path selection.
//!
//! Sweeps the exhaustive search across ascending path lengths and keeps,
//! per word, only the highest-scoring path. Because score is cell count
//! squared, a longer trace of the same word always wins, so the sweep can
//! simply let later (longer) finds replace earlier ones and stop as soon
//! as no dictionary word could span the next length.
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::core::Board;
//! use boggle_engine::dictionary::Dictionary;
//! use boggle_engine::solver::max_score_paths;
//!
//! let board = Board::from_letters(&["CA", "TS"]).unwrap();
//! let dict = Dictionary::from_words(["CAT", "CATS", "AT"]);
//!
//! let solution = max_score_paths(&board, &dict);
//! assert_eq!(solution.total_score(), 29);
//! ```

pub mod solution;

pub use solution::Solution;

use log::debug;

use crate::core::Board;
use crate::dictionary::{Dictionary, PrefixIndex};
use crate::search::{LengthTarget, PathSearch};

/// Find, for every word reachable on the board, the path that scores the
/// most.
///
/// The dictionary is prefiltered against the board's letters and indexed
/// once; the sweep then runs the path search at each cell count from 1
/// through the full board, breaking off early once no remaining word is
/// long enough. Degenerate boards and empty dictionaries yield an empty
/// solution.
#[must_use]
pub fn max_score_paths(board: &Board, dictionary: &Dictionary) -> Solution {
    let feasible = dictionary.filter_feasible(board);
    let index = PrefixIndex::from_dictionary(&feasible);
    let mut solution = Solution::new();

    if board.is_empty() || index.is_empty() {
        return solution;
    }

    let mut search = PathSearch::new(board, &index);
    for n in 1..=board.cell_count() {
        // An n-cell path spells at least n characters; once no word is
        // that long, no later sweep can accept anything either.
        if index.max_word_len() < n {
            break;
        }
        for path in search.find_paths(LengthTarget::PathCells(n)) {
            if let Some(word) = board.spell(&path) {
                solution.record(word, path);
            }
        }
    }

    debug!(
        "selector kept {} words worth {} points on a {}x{} board",
        solution.len(),
        solution.total_score(),
        board.rows(),
        board.cols()
    );
    solution
}
