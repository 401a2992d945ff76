//! Index-arena BOM tree.
//!
//! Nodes live in a flat slot vector and refer to each other by [`NodeId`].
//! Ownership flows strictly root→leaves; the parent link is a plain index
//! back-reference, so there are no reference cycles and no shared owners.
//! Deleting a node detaches it (and with it its whole subtree) from the
//! traversal; detached slots are simply never visited again.
//!
//! There is exactly one implicit invisible root: the tree itself owns the
//! ordered list of top-level nodes. Depth is always derived from the
//! structure, never stored.

use super::{FieldKey, Highlight, PartFields};

/// Handle to a node within one [`BomTree`].
///
/// Ids are only meaningful for the tree that produced them and stay valid
/// for the life of that tree (deletion detaches a node but never reuses
/// its slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Direction for adjacent-sibling moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A single part/assembly node.
#[derive(Debug, Clone)]
pub struct PartNode {
    /// Part identifier (the tree's primary column). Unique among siblings,
    /// NOT globally unique: the same part may recur in several
    /// subassemblies.
    pub identifier: String,
    pub fields: PartFields,
    pub highlight: Highlight,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl PartNode {
    fn new(identifier: String, fields: PartFields, parent: Option<NodeId>) -> Self {
        Self {
            identifier,
            fields,
            highlight: Highlight::None,
            parent,
            children: Vec::new(),
        }
    }
}

/// Mutable n-ary tree of part nodes with ordered children.
#[derive(Debug, Clone, Default)]
pub struct BomTree {
    nodes: Vec<PartNode>,
    roots: Vec<NodeId>,
}

impl BomTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare top-level node (a stub parent inferred by the builder,
    /// or a manually created assembly root).
    pub fn add_root(&mut self, identifier: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(PartNode::new(identifier.into(), PartFields::default(), None));
        self.roots.push(id);
        id
    }

    /// Insert a new child under `parent`, positioned directly after the
    /// sibling `after` (or appended when `after` is `None` or not actually
    /// a child of `parent`). The new node is tagged [`Highlight::New`].
    pub fn add_child_after(
        &mut self,
        parent: NodeId,
        after: Option<NodeId>,
        identifier: impl Into<String>,
        fields: PartFields,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = PartNode::new(identifier.into(), fields, Some(parent));
        node.highlight = Highlight::New;
        self.nodes.push(node);

        let siblings = &mut self.nodes[parent.0].children;
        let at = after
            .and_then(|a| siblings.iter().position(|&c| c == a).map(|i| i + 1))
            .unwrap_or(siblings.len());
        siblings.insert(at, id);
        id
    }

    /// Shared access to a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &PartNode {
        &self.nodes[id.0]
    }

    /// Mutable access to a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut PartNode {
        &mut self.nodes[id.0]
    }

    /// Parent of a node, `None` for top-level (and detached) nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Ordered children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Ordered top-level nodes.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Depth of a node: top-level nodes are at depth 0, their children at 1.
    /// Derived by walking parent links; never stored.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.nodes[id.0].parent;
        while let Some(up) = cursor {
            depth += 1;
            cursor = self.nodes[up.0].parent;
        }
        depth
    }

    /// Number of nodes reachable from the roots.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Detach each given node from its parent (or from the top level),
    /// implicitly discarding its entire subtree. No re-parenting.
    pub fn delete_nodes(&mut self, ids: &[NodeId]) {
        for &id in ids {
            match self.nodes[id.0].parent.take() {
                Some(parent) => self.nodes[parent.0].children.retain(|&c| c != id),
                None => self.roots.retain(|&r| r != id),
            }
        }
    }

    /// Swap a node with its adjacent sibling. Returns `false` without
    /// touching the tree when the node is top-level or already first/last
    /// among its siblings.
    pub fn move_sibling(&mut self, id: NodeId, direction: Direction) -> bool {
        let Some(parent) = self.nodes[id.0].parent else {
            return false;
        };
        let siblings = &mut self.nodes[parent.0].children;
        let Some(at) = siblings.iter().position(|&c| c == id) else {
            return false;
        };
        let target = match direction {
            Direction::Up if at > 0 => at - 1,
            Direction::Down if at + 1 < siblings.len() => at + 1,
            _ => return false,
        };
        siblings.swap(at, target);
        true
    }

    /// Tag each given node.
    pub fn set_highlight(&mut self, ids: &[NodeId], tag: Highlight) {
        for &id in ids {
            self.nodes[id.0].highlight = tag;
        }
    }

    /// Field value of a node by key.
    #[must_use]
    pub fn field(&self, id: NodeId, key: FieldKey) -> &str {
        self.nodes[id.0].fields.get(key)
    }

    /// Set a field value of a node by key.
    pub fn set_field(&mut self, id: NodeId, key: FieldKey, value: impl Into<String>) {
        self.nodes[id.0].fields.set(key, value);
    }

    /// Every node anywhere in the tree whose identifier equals `name`, in
    /// pre-order. Identifier collisions are by design; all matches are
    /// returned.
    #[must_use]
    pub fn find_by_identifier(&self, name: &str) -> Vec<NodeId> {
        self.preorder()
            .filter(|&(id, _)| self.nodes[id.0].identifier == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// Every node with `term` as a case-sensitive substring of its
    /// identifier or of any field, in pre-order.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<NodeId> {
        self.preorder()
            .filter(|&(id, _)| {
                let node = &self.nodes[id.0];
                node.identifier.contains(term) || node.fields.values().any(|v| v.contains(term))
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Depth-first pre-order traversal over `(node, depth)` pairs, starting
    /// from each top-level node in order. Deterministic for a fixed tree.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.roots.iter().rev().map(|&r| (r, 0)).collect(),
        }
    }
}

/// Iterator produced by [`BomTree::preorder`].
pub struct Preorder<'a> {
    tree: &'a BomTree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Preorder<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree.nodes[id.0]
                .children
                .iter()
                .rev()
                .map(|&c| (c, depth + 1)),
        );
        Some((id, depth))
    }
}
