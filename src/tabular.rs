//! Flat-table file I/O.
//!
//! Workbook reading is out of scope; this module is the stand-in boundary,
//! round-tripping [`FlatTable`]s through JSON (an array of column-keyed row
//! objects). Missing optional cells deserialize to empty untagged text, and
//! shape validation happens on read, so the core only ever sees validated
//! rows.

use crate::error::{BomMergeError, Result, TabularErrorKind};
use crate::table::FlatTable;
use std::fs;
use std::path::Path;

/// Read and validate a flat table from a JSON file.
///
/// A single failure is reported per call: unreadable file, malformed JSON,
/// or inconsistent row shape. No partial table is ever returned.
pub fn read_table(path: &Path) -> Result<FlatTable> {
    let raw = fs::read_to_string(path)
        .map_err(|e| BomMergeError::io(path, "failed to read table file", e))?;

    let table: FlatTable = serde_json::from_str(&raw).map_err(|e| {
        BomMergeError::tabular(
            path.display().to_string(),
            TabularErrorKind::InvalidJson(e.to_string()),
        )
    })?;

    table.validate(&path.display().to_string())?;
    tracing::debug!(path = %path.display(), rows = table.len(), "loaded flat table");
    Ok(table)
}

/// Write a flat table as pretty-printed JSON.
pub fn write_table(path: &Path, table: &FlatTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table).map_err(|e| {
        BomMergeError::tabular(
            path.display().to_string(),
            TabularErrorKind::InvalidJson(e.to_string()),
        )
    })?;
    fs::write(path, json).map_err(|e| BomMergeError::io(path, "failed to write table file", e))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "wrote flat table");
    Ok(())
}
