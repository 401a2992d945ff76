//! Tree construction: leveled table → hierarchy.

use crate::error::Result;
use crate::model::{BomTree, NodeId, PartFields};
use crate::table::{FlatRow, FlatTable};
use indexmap::IndexMap;

/// Build a tree from a flat table in a single forward pass.
///
/// Rows are processed once, in input order, against a registry mapping
/// every identifier seen so far to its node. A row whose `PARENT` value has
/// never been registered gets a bare top-level stub node synthesized for it
/// (once per identifier); this is the designed handling for workbook rows
/// referencing an implicit assembly root, not an error. There is no back-patching:
/// a parent registered after one of its referencing rows stays a stub.
///
/// Node highlights are restored from the rows' cell tags, so
/// [`crate::table::flatten`] ∘ `build` round-trips tagged tables.
///
/// The only failure mode is a table whose rows disagree about the optional
/// `APE` column.
pub fn build(table: &FlatTable) -> Result<BomTree> {
    table.validate("flat table")?;

    let mut tree = BomTree::new();
    let mut registry: IndexMap<String, NodeId> = IndexMap::new();

    for row in &table.rows {
        let parent = match registry.get(row.parent.as_str()) {
            Some(&id) => id,
            None => {
                tracing::debug!(parent = %row.parent, "synthesizing stub node for unseen parent");
                let id = tree.add_root(row.parent.clone());
                registry.insert(row.parent.clone(), id);
                id
            }
        };

        let node = tree.add_child_after(parent, None, row.itm.text.clone(), fields_of(row));
        tree.node_mut(node).highlight = row.highlight();
        // Later rows may name this identifier as their parent; a duplicate
        // identifier re-registers to the most recent node.
        registry.insert(row.itm.text.clone(), node);
    }

    tracing::debug!(
        rows = table.len(),
        nodes = tree.node_count(),
        "built tree from flat table"
    );
    Ok(tree)
}

fn fields_of(row: &FlatRow) -> PartFields {
    PartFields {
        prefix: row.prefix.clone(),
        description: row.description.text.clone(),
        quantity: row.quantity.text.clone(),
        unit: row.unit.text.clone(),
        source: row.source.text.clone(),
        process: row.process.text.clone(),
        thread: row.thread.text.clone(),
        ape: row.ape.as_ref().map(|c| c.text.clone()),
    }
}
