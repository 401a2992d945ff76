//! Tree flattening: hierarchy → leveled table.

use crate::model::BomTree;
use crate::table::{Cell, FlatRow, FlatTable};

/// Flatten a tree into one row per non-top-level node, pre-order.
///
/// Top-level nodes are the conceptual root layer and emit no row of their
/// own; they appear only as `PARENT` values of their children (level 1).
/// Every cell of a row carries the node's highlight, mirroring how the
/// editor colors whole rows. The output order is deterministic for a fixed
/// tree, and `flatten` after [`crate::table::build`] reproduces the input
/// table for well-ordered input.
#[must_use]
pub fn flatten(tree: &BomTree) -> FlatTable {
    let mut rows = Vec::new();
    for (id, depth) in tree.preorder() {
        let Some(parent) = tree.parent(id) else {
            continue;
        };
        let node = tree.node(id);
        let tag = node.highlight;
        let cell = |text: &str| Cell::tagged(text, tag);
        rows.push(FlatRow {
            level: depth,
            parent: tree.node(parent).identifier.clone(),
            prefix: node.fields.prefix.clone(),
            itm: cell(&node.identifier),
            description: cell(&node.fields.description),
            quantity: cell(&node.fields.quantity),
            unit: cell(&node.fields.unit),
            source: cell(&node.fields.source),
            process: cell(&node.fields.process),
            thread: cell(&node.fields.thread),
            ape: node.fields.ape.as_deref().map(cell),
        });
    }
    FlatTable::new(rows)
}
