//! Flatten command handler: normalize a table through the tree form.

use super::{emit, exit_codes};
use crate::reports::{render_table, to_json, ReportFormat};
use crate::table::{build, flatten};
use crate::tabular::{read_table, write_table};
use anyhow::Result;
use std::path::Path;

/// Round a table through build → flatten, recomputing levels and parent
/// references, and write the normalized table out.
///
/// With `-o`, the result is written as a JSON table file regardless of
/// format; otherwise it is rendered to stdout in the requested format.
pub fn run_flatten(input: &Path, output: Option<&Path>, format: ReportFormat) -> Result<i32> {
    let table = read_table(input)?;
    let normalized = flatten(&build(&table)?);

    if normalized != table {
        tracing::info!("normalization changed levels or row derivation");
    }

    match output {
        Some(path) => write_table(path, &normalized)?,
        None => {
            let rendered = match format {
                ReportFormat::Table | ReportFormat::Summary => render_table(&normalized),
                ReportFormat::Json => to_json(&normalized)?,
            };
            emit(None, &rendered)?;
        }
    }
    Ok(exit_codes::SUCCESS)
}
