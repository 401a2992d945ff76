//! Rename command handler: engineering-change rename with propagation.

use super::{emit, exit_codes};
use crate::model::rename_node;
use crate::reports::{render_table, to_json, ReportFormat};
use crate::table::{build, flatten};
use crate::tabular::{read_table, write_table};
use anyhow::Result;
use std::path::Path;

/// Rename every node matching `old_name`, propagate the revision bump up
/// the tree, and emit the re-flattened table.
///
/// Zero matches is not an error; the table passes through unchanged.
pub fn run_rename(
    input: &Path,
    old_name: &str,
    new_name: &str,
    output: Option<&Path>,
    format: ReportFormat,
) -> Result<i32> {
    let table = read_table(input)?;
    let mut tree = build(&table)?;

    let renamed = rename_node(&mut tree, old_name, new_name);
    if renamed == 0 {
        tracing::warn!(old_name, "no nodes matched; nothing renamed");
    }

    let result = flatten(&tree);
    match output {
        Some(path) => write_table(path, &result)?,
        None => {
            let rendered = match format {
                ReportFormat::Table | ReportFormat::Summary => render_table(&result),
                ReportFormat::Json => to_json(&result)?,
            };
            emit(None, &rendered)?;
        }
    }
    Ok(exit_codes::SUCCESS)
}
