//! Capacities used by the default toolkit.
//!
//! ```rust
//! use spk_utils::config::SpkConfig;
//!
//! let config = SpkConfig::default().with_max_object_ids(20_000);
//! assert_eq!(config.max_coverage_intervals, 100);
//! assert_eq!(config.max_object_ids, 20_000);
//! ```

use crate::constants::{MAX_COVERAGE_INTERVALS, MAX_OBJECT_IDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpkConfig {
    /// Maximum number of disjoint intervals in a coverage window
    pub max_coverage_intervals: usize,
    /// Maximum number of distinct body identifiers read from one file
    pub max_object_ids: usize,
}

impl Default for SpkConfig {
    fn default() -> Self {
        SpkConfig {
            max_coverage_intervals: MAX_COVERAGE_INTERVALS,
            max_object_ids: MAX_OBJECT_IDS,
        }
    }
}

impl SpkConfig {
    pub fn with_max_coverage_intervals(mut self, max_coverage_intervals: usize) -> Self {
        self.max_coverage_intervals = max_coverage_intervals;
        self
    }

    pub fn with_max_object_ids(mut self, max_object_ids: usize) -> Self {
        self.max_object_ids = max_object_ids;
        self
    }
}
