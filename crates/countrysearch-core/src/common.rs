// crates/countrysearch-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a dataset.
///
/// Returned by [`crate::Dataset::stats`]. `total_population` only sums
/// records whose population is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub countries: usize,
    pub languages: usize,
    pub total_population: u64,
}
