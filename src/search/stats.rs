//! Path search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one path search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Cells entered (branch extensions that survived pruning).
    pub cells_visited: u64,

    /// Branches abandoned: dead prefix, length floor, or overshoot.
    pub branches_pruned: u64,

    /// Paths accepted into the result.
    pub paths_found: u32,

    /// Deepest path reached, in cells.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of attempted extensions that were pruned.
    #[must_use]
    pub fn prune_rate(&self) -> f64 {
        let attempts = self.cells_visited + self.branches_pruned;
        if attempts == 0 {
            0.0
        } else {
            self.branches_pruned as f64 / attempts as f64
        }
    }

    /// Cells entered per second.
    #[must_use]
    pub fn cells_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.cells_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
