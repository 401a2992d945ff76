//! Revision comparison between two flattened BOM tables.
//!
//! The comparator keys rows by their ordinal position: rows the newer
//! revision has beyond the older one are reported as insertions and padded
//! into an aligned view of the old table for side-by-side presentation. It
//! is a structural index diff, not a content diff; see [`compare`] for the
//! exact semantics and their known limits.

mod compare;
mod result;

pub use compare::compare;
pub use result::{ComparisonResult, ComparisonSummary};
