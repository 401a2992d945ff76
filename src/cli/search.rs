//! Search command handler.

use super::{emit, exit_codes};
use crate::table::build;
use crate::tabular::read_table;
use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Find every node whose identifier or fields contain `term` (case
/// sensitive) and print one line per match. Exits with
/// [`exit_codes::DIFFERENCES`] when nothing matches.
pub fn run_search(input: &Path, term: &str) -> Result<i32> {
    let table = read_table(input)?;
    let tree = build(&table)?;

    let matches = tree.search(term);
    let mut out = String::new();
    for &id in &matches {
        let node = tree.node(id);
        let _ = writeln!(
            out,
            "{}{}  {}",
            "  ".repeat(tree.depth(id)),
            node.identifier,
            node.fields.description
        );
    }
    emit(None, &out)?;

    if matches.is_empty() {
        tracing::info!(term, "no matches");
        Ok(exit_codes::DIFFERENCES)
    } else {
        tracing::info!(term, count = matches.len(), "search matches");
        Ok(exit_codes::SUCCESS)
    }
}
