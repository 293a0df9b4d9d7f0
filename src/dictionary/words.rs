//! The word set the engine searches against.
//!
//! A [`Dictionary`] is a hash set of non-empty words, owned by the caller
//! and read-only to the engine. Casing is never normalized: the caller
//! keeps words and board tiles in consistent case (the classic setup is
//! uppercase both).
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::dictionary::Dictionary;
//!
//! let dict = Dictionary::from_words(["CAT", "CATS", "AT"]);
//! assert!(dict.contains("CAT"));
//! assert!(!dict.contains("DOG"));
//! assert_eq!(dict.len(), 3);
//! ```

use std::io;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Board;

/// A set of words, hash backed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words.
    ///
    /// Empty strings are skipped; every stored word is non-empty.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Read a word list: one word per line, surrounding whitespace
    /// trimmed, blank lines skipped.
    ///
    /// ```
    /// use boggle_engine::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_reader("CAT\nDOG\n\n  BIRD  \n".as_bytes()).unwrap();
    /// assert_eq!(dict.len(), 3);
    /// assert!(dict.contains("BIRD"));
    /// ```
    pub fn from_reader<R: io::Read>(mut reader: R) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_words(text.split_whitespace()))
    }

    /// Read a word list file (see [`Dictionary::from_reader`]).
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_words(text.split_whitespace()))
    }

    /// Add a word. Returns false for empty strings and words already
    /// present.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        let word = word.into();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// Whether a word is in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Keep only words whose characters all appear somewhere on the board.
    ///
    /// A cheap necessary condition, not a sufficient one: it ignores how
    /// many tiles carry a letter and whether they connect, so it may keep
    /// words the board cannot actually spell. It never drops a word the
    /// board can spell, and running it twice changes nothing.
    ///
    /// ```
    /// use boggle_engine::core::Board;
    /// use boggle_engine::dictionary::Dictionary;
    ///
    /// let board = Board::from_letters(&["CA", "TS"]).unwrap();
    /// let dict = Dictionary::from_words(["CAT", "DOG", "CAST"]);
    ///
    /// let feasible = dict.filter_feasible(&board);
    /// assert!(feasible.contains("CAT"));
    /// assert!(feasible.contains("CAST"));
    /// assert!(!feasible.contains("DOG"));
    /// ```
    #[must_use]
    pub fn filter_feasible(&self, board: &Board) -> Self {
        let letters = board.letter_set();
        let words = self
            .words
            .iter()
            .filter(|word| word.chars().all(|c| letters.contains(&c)))
            .cloned()
            .collect();
        Self { words }
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
