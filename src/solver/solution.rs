//! The word → best-path result set.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Path;

/// Best discovered path per word.
///
/// One entry per distinct word reachable on a board; each entry holds the
/// highest-scoring path seen for that word. Built fresh per
/// (board, dictionary); never updated incrementally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    best: FxHashMap<String, Path>,
}

impl Solution {
    /// Create an empty solution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a path for a word. Kept only when it scores strictly more
    /// than the path already held, so on equal scores the first offer
    /// wins. Returns whether the path was kept.
    pub fn record(&mut self, word: String, path: Path) -> bool {
        match self.best.entry(word) {
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                if path.score() > entry.get().score() {
                    entry.insert(path);
                    true
                } else {
                    false
                }
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(path);
                true
            }
        }
    }

    /// The best path for a word, if the word is reachable.
    #[must_use]
    pub fn best_path(&self, word: &str) -> Option<&Path> {
        self.best.get(word)
    }

    /// The score the best path for a word earns.
    #[must_use]
    pub fn score_of(&self, word: &str) -> Option<u32> {
        self.best.get(word).map(Path::score)
    }

    /// Whether a word is reachable.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.best.contains_key(word)
    }

    /// The reachable words (unordered).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.best.keys().map(String::as_str)
    }

    /// Word and best path pairs (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.best.iter().map(|(word, path)| (word.as_str(), path))
    }

    /// Number of reachable words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no word is reachable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// The score ceiling: every reachable word found along its best path.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.best.values().map(|path| u64::from(path.score())).sum()
    }
}
