//! Index-keyed revision comparison.

use crate::error::{BomMergeError, CompareErrorKind, Result};
use crate::table::{FlatRow, FlatTable, COLUMNS};

use super::{ComparisonResult, ComparisonSummary};

/// Compare two flattened revisions by row position.
///
/// Row identity is the ordinal index, NOT the part identifier: the result
/// reports the indices present in the new table's index set but absent
/// from the old one, which for dense tables is exactly
/// `old.len()..new.len()`. Identical content at different positions is not
/// recognized, so a moved-but-unchanged row shows up as a difference and a
/// shrunken new table reports nothing.
///
/// Both tables must be internally uniform and agree about the optional
/// `APE` column; a mismatch is a fatal configuration error with no partial
/// result.
pub fn compare(old: &FlatTable, new: &FlatTable) -> Result<ComparisonResult> {
    old.validate("old table")?;
    new.validate("new table")?;

    if !old.is_empty() && !new.is_empty() && old.has_ape() != new.has_ape() {
        return Err(BomMergeError::compare(
            "old and new tables have different column sets",
            CompareErrorKind::ShapeMismatch {
                old_columns: COLUMNS.len() + usize::from(old.has_ape()),
                new_columns: COLUMNS.len() + usize::from(new.has_ape()),
            },
        ));
    }

    let missing_from_old: Vec<usize> = (old.len()..new.len()).collect();

    let with_ape = if old.is_empty() {
        new.has_ape()
    } else {
        old.has_ape()
    };
    let mut aligned_old = old.clone();
    for &index in &missing_from_old {
        let at = index.min(aligned_old.len());
        aligned_old.rows.insert(at, FlatRow::placeholder(with_ape));
    }

    tracing::debug!(
        old_rows = old.len(),
        new_rows = new.len(),
        inserted = missing_from_old.len(),
        "compared revisions by row index"
    );

    Ok(ComparisonResult {
        summary: ComparisonSummary {
            old_rows: old.len(),
            new_rows: new.len(),
            inserted: missing_from_old.len(),
        },
        missing_from_old,
        aligned_old,
    })
}
