//! Named table snapshots.
//!
//! Each transform of the edited tree produces a [`FlatTable`]; the store
//! keeps those under explicit slot names (`"old"`, `"new"`, …), so the
//! comparator selects revisions by name rather than by list position.
//! Slots are replaceable, insertion-ordered, and carry a capture timestamp
//! plus a content hash for quick equality checks.

use crate::diff::{compare, ComparisonResult};
use crate::error::{BomMergeError, Result};
use crate::table::FlatTable;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// One captured table revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub name: String,
    pub captured_at: DateTime<Utc>,
    /// xxh3 of the serialized rows; equal hashes mean equal content.
    pub content_hash: u64,
    pub table: FlatTable,
}

impl TableSnapshot {
    fn capture(name: String, table: FlatTable) -> Self {
        Self {
            content_hash: content_hash(&table),
            captured_at: Utc::now(),
            name,
            table,
        }
    }
}

/// Hash a table's content (serialized row stream).
#[must_use]
pub fn content_hash(table: &FlatTable) -> u64 {
    match serde_json::to_vec(&table.rows) {
        Ok(bytes) => xxh3_64(&bytes),
        // Rows contain only strings and integers; serialization cannot
        // fail in practice. Hash nothing rather than propagate.
        Err(_) => xxh3_64(&[]),
    }
}

/// Insertion-ordered store of named snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotStore {
    slots: IndexMap<String, TableSnapshot>,
}

impl SnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a table under a slot name, replacing any previous snapshot
    /// in that slot. Returns the content hash of the captured table.
    pub fn insert(&mut self, name: impl Into<String>, table: FlatTable) -> u64 {
        let name = name.into();
        let snapshot = TableSnapshot::capture(name.clone(), table);
        let hash = snapshot.content_hash;
        tracing::debug!(slot = %name, rows = snapshot.table.len(), "captured snapshot");
        self.slots.insert(name, snapshot);
        hash
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableSnapshot> {
        self.slots.get(name)
    }

    /// Remove a slot, returning its snapshot if it existed.
    pub fn remove(&mut self, name: &str) -> Option<TableSnapshot> {
        self.slots.shift_remove(name)
    }

    /// Slot names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Run the revision comparator over two named slots.
    pub fn compare_slots(&self, old: &str, new: &str) -> Result<ComparisonResult> {
        let old_snapshot = self
            .get(old)
            .ok_or_else(|| BomMergeError::SlotNotFound(old.to_string()))?;
        let new_snapshot = self
            .get(new)
            .ok_or_else(|| BomMergeError::SlotNotFound(new.to_string()))?;
        compare(&old_snapshot.table, &new_snapshot.table)
    }
}
