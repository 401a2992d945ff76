//! Output rendering for trees, tables, and comparison results.
//!
//! Three formats, selected per command: an aligned text table, a compact
//! shell-friendly summary, and JSON for programmatic consumers. Highlight
//! tags render as one-character markers (`+` new, `~` changed, `-` marked
//! for deletion) in the text formats.

mod json;
mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use json::to_json;
pub use text::{render_comparison, render_side_by_side, render_summary, render_table, render_tree};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Aligned text table (side-by-side for comparisons)
    #[default]
    Table,
    /// Compact one-line summary
    Summary,
    /// Pretty-printed JSON
    Json,
}
