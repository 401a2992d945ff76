//! In-memory BOM hierarchy model.
//!
//! This module defines the mutable part tree the editor operates on: an
//! index-arena [`BomTree`] of [`PartNode`]s with ordered children, the fixed
//! [`PartFields`] record, highlight tags, revision-letter handling, and
//! rename propagation. The flat-table representations live in
//! [`crate::table`].

mod fields;
mod node;
mod rename;
mod revision;

pub use fields::{FieldKey, Highlight, PartFields};
pub use node::{BomTree, Direction, NodeId, PartNode, Preorder};
pub use rename::rename_node;
pub use revision::increment_suffix;
