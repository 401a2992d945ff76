//! JSON report output.

use crate::error::{BomMergeError, Result};
use serde::Serialize;

/// Serialize any report value as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| BomMergeError::Validation(format!("JSON report serialization failed: {e}")))
}
