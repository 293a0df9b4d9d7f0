//! # boggle-engine
//!
//! An exhaustive word-search engine for Boggle-style letter grids.
//!
//! ## Design Principles
//!
//! 1. **Exhaustive by construction**: Searches enumerate every
//!    qualifying path. Pruning only removes branches that provably
//!    cannot reach a dictionary word, never the words themselves.
//!
//! 2. **Deterministic**: Cells scan row-major and neighbors walk a
//!    fixed offset order, so the same board and dictionary always
//!    produce the same paths in the same order.
//!
//! 3. **Tiles Are Strings**: A tile may carry several letters (the
//!    classic "QU" die), so path length in cells and word length in
//!    letters are tracked as separate measures throughout.
//!
//! ## Architecture
//!
//! - **Prefix Index**: The dictionary compiles into a trie whose nodes
//!   carry the longest word length below them, so dead prefixes and
//!   too-short subtrees are cut before a cell is entered.
//!
//! - **Backtracking Over a Visited Mask**: One boolean mask per search,
//!   marked on entry and restored on exit. No per-step copying.
//!
//! - **Persistent Session State**: Play sessions clone in O(1) via
//!   `im`, so a shell can snapshot before every submission.
//!
//! ## Modules
//!
//! - `core`: Cells, boards, paths, and the seeded deal RNG
//! - `dictionary`: Word sets and the prefix index
//! - `search`: Fixed-length exhaustive path search
//! - `validate`: Single-path validation with discriminated failures
//! - `solver`: Max-score sweep over all path lengths
//! - `session`: Scored interactive play with once-per-word bookkeeping
//! - `generate`: Dice-based random board deals

pub mod core;
pub mod dictionary;
pub mod search;
pub mod validate;
pub mod solver;
pub mod session;
pub mod generate;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Cell, Path,
    BoardRng, BoardRngState,
};

pub use crate::dictionary::{Dictionary, PrefixIndex, PrefixNode};

pub use crate::search::{LengthTarget, PathSearch, SearchStats};

pub use crate::validate::{validate_path, PathError};

pub use crate::solver::{max_score_paths, Solution};

pub use crate::session::{Acceptance, GameSession, SubmitError};

pub use crate::generate::{BoardGenerator, Die, GeneratorError};
