//! Exhaustive backtracking search for word-spelling paths.

pub mod engine;
pub mod stats;

pub use engine::{LengthTarget, PathSearch};
pub use stats::SearchStats;
