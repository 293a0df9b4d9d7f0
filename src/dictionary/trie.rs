//! Prefix index over a word set.
//!
//! The search never rebuilds candidate word sets while it walks the
//! board. Instead it holds a node of this trie: the node reached after
//! consuming the accumulated word stands for exactly the set of words
//! with that prefix, and each node records the length of the longest
//! word below it. Checking "is any candidate of length ≥ n still live"
//! is then one comparison, and a failed child lookup means the branch is
//! dead.
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::dictionary::PrefixIndex;
//!
//! let index = PrefixIndex::from_words(["CAT", "CATS", "COLD"]);
//!
//! assert!(index.contains("CAT"));
//! assert!(!index.contains("CA"));
//! assert!(index.contains_prefix("CA"));
//! assert!(!index.contains_prefix("D"));
//! assert_eq!(index.max_word_len(), 4);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Dictionary;

/// One trie node: the set of indexed words sharing a fixed prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixNode {
    children: FxHashMap<char, PrefixNode>,
    terminal: bool,
    depth: usize,
    max_word_len: usize,
}

impl PrefixNode {
    fn at_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// The child for one more character, if any indexed word continues
    /// this way.
    #[must_use]
    pub fn child(&self, c: char) -> Option<&PrefixNode> {
        self.children.get(&c)
    }

    /// Walk a multi-character fragment (a tile string, usually), or
    /// `None` as soon as a character has no child.
    #[must_use]
    pub fn descend(&self, fragment: &str) -> Option<&PrefixNode> {
        let mut node = self;
        for c in fragment.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Whether the prefix leading here is itself an indexed word.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Characters consumed to reach this node. Equals the length, in
    /// characters, of the word accumulated so far.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Length of the longest indexed word passing through this node.
    ///
    /// Zero only at the root of an empty index. A branch hunting words of
    /// length ≥ n is dead once this drops below n.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

/// A trie over a word set, built once per (board, dictionary) pairing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixIndex {
    root: PrefixNode,
    len: usize,
}

impl PrefixIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the given words. Empty strings are skipped.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Index every word of a dictionary.
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        Self::from_words(dictionary.iter())
    }

    /// Add one word. Returns false for empty strings and words already
    /// indexed.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word_len = word.chars().count();

        let mut node = &mut self.root;
        node.max_word_len = node.max_word_len.max(word_len);
        for c in word.chars() {
            let depth = node.depth + 1;
            node = node
                .children
                .entry(c)
                .or_insert_with(|| PrefixNode::at_depth(depth));
            node.max_word_len = node.max_word_len.max(word_len);
        }

        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.len += 1;
            true
        }
    }

    /// Number of indexed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no words are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length, in characters, of the longest indexed word.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.root.max_word_len
    }

    /// The root node (the empty-prefix view of the whole set).
    #[must_use]
    pub fn root(&self) -> &PrefixNode {
        &self.root
    }

    /// Whether a word is indexed.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.root.descend(word).is_some_and(PrefixNode::is_terminal)
    }

    /// Whether any indexed word starts with the given prefix.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.root
            .descend(prefix)
            .is_some_and(|node| node.max_word_len > 0)
    }
}
