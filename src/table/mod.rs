//! Flat-table representation and tree ⇄ table conversion.
//!
//! [`FlatTable`] is both the interchange format (JSON, see
//! [`crate::tabular`]) and the input to the revision comparator. The
//! conversions are inverses for well-ordered input: [`build`] tolerates
//! forward references by synthesizing stub parents, and [`flatten`]
//! recomputes levels from structure.

mod build;
mod flatten;
mod row;

pub use build::build;
pub use flatten::flatten;
pub use row::{Cell, FlatRow, FlatTable, APE_COLUMN, COLUMNS};
