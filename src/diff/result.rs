//! Comparison result structures.

use crate::table::FlatTable;
use serde::{Deserialize, Serialize};

/// Result of comparing two flattened BOM revisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct ComparisonResult {
    /// Summary statistics
    pub summary: ComparisonSummary,
    /// Row indices present in the new revision but absent from the old one
    pub missing_from_old: Vec<usize>,
    /// The old table with a blank placeholder row (tagged as an insertion)
    /// at each missing index, ready for side-by-side presentation against
    /// the new table.
    pub aligned_old: FlatTable,
}

impl ComparisonResult {
    /// Whether the comparison found any row-set difference.
    #[must_use]
    pub fn has_differences(&self) -> bool {
        !self.missing_from_old.is_empty()
    }
}

/// Row counts of a comparison.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub old_rows: usize,
    pub new_rows: usize,
    pub inserted: usize,
}
