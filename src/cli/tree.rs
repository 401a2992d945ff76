//! Tree command handler: load a flat table and print the hierarchy.

use super::{emit, exit_codes};
use crate::reports::render_tree;
use crate::table::build;
use crate::tabular::read_table;
use anyhow::Result;
use std::path::Path;

/// Build a tree from a table file and print it as an indented outline.
pub fn run_tree(input: &Path) -> Result<i32> {
    let table = read_table(input)?;
    let tree = build(&table)?;
    tracing::info!(
        rows = table.len(),
        nodes = tree.node_count(),
        roots = tree.roots().len(),
        "built hierarchy"
    );
    emit(None, &render_tree(&tree))?;
    Ok(exit_codes::SUCCESS)
}
