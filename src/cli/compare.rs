//! Compare command handler.
//!
//! Loads two table files into the named snapshot slots and runs the
//! revision comparator over them.

use super::{emit, exit_codes};
use crate::config::AppConfig;
use crate::reports::{render_comparison, render_summary, to_json, ReportFormat};
use crate::snapshot::SnapshotStore;
use crate::tabular::read_table;
use anyhow::Result;
use std::path::Path;

/// Compare an old and a new revision table.
///
/// Returns [`exit_codes::DIFFERENCES`] when rows are missing from the old
/// revision, [`exit_codes::SUCCESS`] otherwise.
pub fn run_compare(old_path: &Path, new_path: &Path, config: &AppConfig) -> Result<i32> {
    config.validate()?;

    let mut store = SnapshotStore::new();
    store.insert(config.slots.old.clone(), read_table(old_path)?);
    store.insert(config.slots.new.clone(), read_table(new_path)?);

    let result = store.compare_slots(&config.slots.old, &config.slots.new)?;

    let rendered = match config.output.format {
        ReportFormat::Table => {
            // The store holds the new table; render against it for the
            // side-by-side view.
            let new_table = store
                .get(&config.slots.new)
                .map(|s| &s.table)
                .cloned()
                .unwrap_or_default();
            render_comparison(&result, &new_table)
        }
        ReportFormat::Summary => render_summary(&result),
        ReportFormat::Json => to_json(&result)?,
    };

    if !(config.behavior.quiet && !result.has_differences()) {
        emit(config.output.file.as_deref(), &rendered)?;
    }

    if result.has_differences() {
        Ok(exit_codes::DIFFERENCES)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
