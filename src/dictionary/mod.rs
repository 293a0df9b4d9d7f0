//! Word sets: the dictionary, its board prefilter, and the prefix index
//! the search prunes against.

pub mod trie;
pub mod words;

pub use trie::{PrefixIndex, PrefixNode};
pub use words::Dictionary;
