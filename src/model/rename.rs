//! Rename propagation.
//!
//! Renaming a part identifier models an engineering change: every matching
//! node takes the new identifier, and every enclosing assembly gets its
//! revision letter bumped, cascading to the top of the tree.

use super::{increment_suffix, BomTree, Highlight, NodeId};

/// Rename every node matching `old_name` to `new_name`, mark each renamed
/// node [`Highlight::Changed`], then walk each renamed node's ancestor
/// chain to the root bumping revision letters and marking `Changed`.
///
/// Returns the number of directly renamed nodes; zero matches is a valid
/// no-op, not an error.
///
/// Ancestors are walked once per renamed node: when two matches share an
/// ancestor, its revision letter is bumped once per match. An ancestor
/// whose identifier carries no revision letter is still marked `Changed`;
/// its text is left untouched ([`increment_suffix`] is the identity there).
pub fn rename_node(tree: &mut BomTree, old_name: &str, new_name: &str) -> usize {
    let matches = tree.find_by_identifier(old_name);
    if matches.is_empty() {
        tracing::debug!(old_name, "rename matched no nodes");
        return 0;
    }

    for &id in &matches {
        let node = tree.node_mut(id);
        node.identifier = new_name.to_string();
        node.highlight = Highlight::Changed;
        bump_ancestors(tree, id);
    }

    tracing::info!(
        old_name,
        new_name,
        count = matches.len(),
        "renamed nodes and propagated revision bump"
    );
    matches.len()
}

/// Iterative ancestor walk (explicit loop, not recursion; BOM trees can
/// be deep and the chain length is unbounded).
fn bump_ancestors(tree: &mut BomTree, from: NodeId) {
    let mut cursor = tree.parent(from);
    while let Some(id) = cursor {
        let node = tree.node_mut(id);
        node.identifier = increment_suffix(&node.identifier);
        node.highlight = Highlight::Changed;
        cursor = tree.parent(id);
    }
}
