//! Exhaustive path enumeration.
//!
//! Depth-first backtracking from every board cell in row-major order.
//! Each branch carries its path, its accumulated word, a visited mask
//! that is marked on enter and unmarked on exit (never copied), and a
//! trie node standing for every dictionary word the accumulated word is
//! still a prefix of. A branch dies the moment that node disappears
//! (no word continues this way) or its longest continuation falls short
//! of the target.
//!
//! Traversal order is fixed, so a given (board, index, target) always
//! produces the same result vector; callers should still treat it as an
//! unordered collection, since the order is not part of the contract.
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::core::Board;
//! use boggle_engine::dictionary::PrefixIndex;
//! use boggle_engine::search::{LengthTarget, PathSearch};
//!
//! let board = Board::from_letters(&["CA", "TS"]).unwrap();
//! let index = PrefixIndex::from_words(["CAT", "CATS", "AT"]);
//!
//! let mut search = PathSearch::new(&board, &index);
//! let paths = search.find_paths(LengthTarget::WordChars(3));
//!
//! assert_eq!(paths.len(), 1);
//! assert_eq!(board.spell(&paths[0]).unwrap(), "CAT");
//! ```

use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Path};
use crate::dictionary::{PrefixIndex, PrefixNode};

use super::stats::SearchStats;

/// What a search target measures.
///
/// The two coincide on single-letter boards and split once a tile spells
/// several characters: a "QU" tile advances the word by two while the
/// path grows by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthTarget {
    /// Accept paths with exactly this many cells.
    PathCells(usize),
    /// Accept paths whose spelled word has exactly this many characters.
    WordChars(usize),
}

impl LengthTarget {
    /// The target value, whichever unit it measures.
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::PathCells(n) | Self::WordChars(n) => n,
        }
    }

    /// The shortest word, in characters, that could satisfy this target.
    ///
    /// Every tile spells at least one character, so an n-cell path spells
    /// at least n characters; words shorter than this can be discarded
    /// before the search starts.
    #[must_use]
    pub const fn min_word_chars(self) -> usize {
        self.value()
    }
}

impl std::fmt::Display for LengthTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PathCells(n) => write!(f, "{n} cells"),
            Self::WordChars(n) => write!(f, "{n} chars"),
        }
    }
}

/// Branch-local state, threaded through the recursion and restored on
/// the way back out.
struct Branch {
    visited: Vec<bool>,
    path: Path,
    word: String,
}

impl Branch {
    fn new(cell_count: usize) -> Self {
        Self {
            visited: vec![false; cell_count],
            path: Path::new(),
            word: String::new(),
        }
    }
}

/// Exhaustive path search over one board and one prefix index.
///
/// Borrows both; build the index once per (board, dictionary) pairing
/// and reuse the search across targets. Each `find_paths` call resets
/// the statistics.
pub struct PathSearch<'a> {
    board: &'a Board,
    index: &'a PrefixIndex,
    stats: SearchStats,
}

impl<'a> PathSearch<'a> {
    /// Create a search over a board and a prefix index.
    ///
    /// The index should cover (at most) the words the caller considers
    /// valid; pre-filtering with `Dictionary::filter_feasible` shrinks it
    /// but is not required for correctness.
    pub fn new(board: &'a Board, index: &'a PrefixIndex) -> Self {
        Self {
            board,
            index,
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the most recent `find_paths` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Enumerate every path meeting the target whose spelled word is in
    /// the index.
    ///
    /// Each accepted path is structurally distinct by construction, so
    /// the result carries no duplicates without any membership checking.
    /// A zero target, an empty board, or an index with no long-enough
    /// word yields an empty vector.
    pub fn find_paths(&mut self, target: LengthTarget) -> Vec<Path> {
        let start = Instant::now();
        self.stats.reset();
        let mut results = Vec::new();

        let board = self.board;
        let index = self.index;
        if target.value() > 0
            && !board.is_empty()
            && index.max_word_len() >= target.min_word_chars()
        {
            let root = index.root();
            let mut branch = Branch::new(board.cell_count());
            for cell in board.cells() {
                self.explore(cell, root, target, &mut branch, &mut results);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "path search for {target} found {} paths: {} cells entered, {} branches pruned, {}us",
            results.len(),
            self.stats.cells_visited,
            self.stats.branches_pruned,
            self.stats.time_us
        );
        results
    }

    /// Try to extend the branch onto `cell`. `node` is the trie position
    /// before consuming this cell's tile.
    fn explore(
        &mut self,
        cell: Cell,
        node: &PrefixNode,
        target: LengthTarget,
        branch: &mut Branch,
        results: &mut Vec<Path>,
    ) {
        let board = self.board;
        let Some(tile) = board.get(cell) else {
            return;
        };

        // Dead prefix or no continuation long enough: the live candidate
        // set for this branch is empty.
        let Some(next) = node.descend(tile) else {
            self.stats.branches_pruned += 1;
            return;
        };
        if next.max_word_len() < target.min_word_chars() {
            self.stats.branches_pruned += 1;
            return;
        }

        let reached = match target {
            LengthTarget::PathCells(_) => branch.path.len() + 1,
            LengthTarget::WordChars(_) => next.depth(),
        };
        if reached > target.value() {
            // A multi-character tile jumped past a WordChars target.
            self.stats.branches_pruned += 1;
            return;
        }

        let flat = cell.row * board.cols() + cell.col;
        branch.visited[flat] = true;
        branch.path.push(cell);
        branch.word.push_str(tile);
        self.stats.cells_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(branch.path.len() as u16);

        if reached == target.value() {
            // At the target the branch ends either way: accepted paths
            // are never extended, and longer words can't match anymore.
            if next.is_terminal() {
                trace!("accepted {:?} via {}", branch.word, branch.path);
                results.push(branch.path.clone());
                self.stats.paths_found += 1;
            }
        } else {
            for neighbor in board.neighbors(cell) {
                if !branch.visited[neighbor.row * board.cols() + neighbor.col] {
                    self.explore(neighbor, next, target, branch, results);
                }
            }
        }

        branch.word.truncate(branch.word.len() - tile.len());
        branch.path.pop();
        branch.visited[flat] = false;
    }
}
