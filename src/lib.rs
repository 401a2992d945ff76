//! **Hierarchical BOM editing and revision comparison.**
//!
//! `bom-merge` works with engineering Bills of Materials as editable part
//! trees. A flat leveled table (one row per part, keyed by `PARENT`/`ITM`
//! identifiers) is built into a mutable hierarchy, edited (nodes added,
//! deleted, reordered, renamed with automatic revision-letter propagation),
//! then flattened back into a table and compared against an earlier
//! revision.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the mutable [`BomTree`] arena of part nodes, field
//!   records, highlight tags, revision-letter handling
//!   ([`increment_suffix`]) and rename propagation ([`rename_node`]).
//! - **[`table`]**: the [`FlatTable`] leveled-table form and the
//!   [`build`](table::build) / [`flatten`](table::flatten) conversions
//!   between it and the tree.
//! - **[`diff`]**: the index-keyed revision comparator producing a
//!   [`ComparisonResult`] with an aligned side-by-side view.
//! - **[`snapshot`]**: named revision slots ([`SnapshotStore`]) holding
//!   captured tables with content hashes and timestamps.
//! - **[`tabular`]**: JSON file round-tripping for flat tables.
//! - **[`reports`]**: text and JSON renderers for trees, tables, and
//!   comparison results.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use bom_merge::{tabular, table, model};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rows = tabular::read_table(Path::new("bom-old.json"))?;
//!     let mut tree = table::build(&rows)?;
//!
//!     // An engineering change: rename the part and bump every enclosing
//!     // assembly's revision letter.
//!     let renamed = model::rename_node(&mut tree, "161-00345A", "161-00345B");
//!     println!("renamed {renamed} node(s)");
//!
//!     tabular::write_table(Path::new("bom-new.json"), &table::flatten(&tree))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Comparing Two Revisions
//!
//! ```no_run
//! use std::path::Path;
//! use bom_merge::{diff, tabular};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = tabular::read_table(Path::new("bom-old.json"))?;
//!     let new = tabular::read_table(Path::new("bom-new.json"))?;
//!
//!     let result = diff::compare(&old, &new)?;
//!     for index in &result.missing_from_old {
//!         println!("row {index} of the new revision has no counterpart");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::unwrap_used)]
#![allow(clippy::similar_names)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod reports;
pub mod snapshot;
pub mod table;
pub mod tabular;

// Re-export main types for convenience
pub use config::{AppConfig, BehaviorConfig, OutputConfig, SlotConfig};
pub use diff::{compare, ComparisonResult, ComparisonSummary};
pub use error::{BomMergeError, Result};
pub use model::{
    increment_suffix, rename_node, BomTree, Direction, FieldKey, Highlight, NodeId, PartFields,
    PartNode,
};
pub use reports::ReportFormat;
pub use snapshot::{SnapshotStore, TableSnapshot};
pub use table::{build, flatten, Cell, FlatRow, FlatTable};
