//! End-to-end tests over the build → edit → rename → flatten → compare flow.

use bom_merge::model::{rename_node, Direction, FieldKey, Highlight};
use bom_merge::snapshot::SnapshotStore;
use bom_merge::table::{build, flatten, FlatRow, FlatTable};

/// Helper to create an untagged row
fn row(level: usize, parent: &str, itm: &str, desc: &str, qty: &str) -> FlatRow {
    FlatRow::plain(level, parent, "4", itm, desc, qty, "EA")
}

/// A small two-assembly BOM in valid parent-before-child order
fn sample_rows() -> FlatTable {
    FlatTable::new(vec![
        row(1, "ROOT-A", "ASSY1-A", "upper assy", "1"),
        row(2, "ASSY1-A", "161-00345A", "bracket", "2"),
        row(2, "ASSY1-A", "161-00346A", "bolt", "8"),
        row(1, "ROOT-A", "ASSY2-A", "lower assy", "1"),
        row(2, "ASSY2-A", "161-00347A", "plate", "1"),
    ])
}

#[test]
fn full_edit_cycle_round_trips() {
    let original = sample_rows();
    let mut tree = build(&original).unwrap();

    // Untouched round trip first.
    assert_eq!(flatten(&tree), original);

    // Add a new part after the bracket, mark the plate for deletion.
    let assy1 = tree.find_by_identifier("ASSY1-A")[0];
    let bracket = tree.find_by_identifier("161-00345A")[0];
    let added = tree.add_child_after(
        assy1,
        Some(bracket),
        "161-00348",
        Default::default(),
    );
    tree.set_field(added, FieldKey::Description, "shim");
    let plate = tree.find_by_identifier("161-00347A")[0];
    tree.set_highlight(&[plate], Highlight::ToBeDeleted);

    let edited = flatten(&tree);
    assert_eq!(edited.len(), original.len() + 1);
    // Insertion position: directly after the bracket row.
    assert_eq!(edited.rows[2].itm.text, "161-00348");
    assert_eq!(edited.rows[2].highlight(), Highlight::New);
    assert_eq!(edited.rows[5].highlight(), Highlight::ToBeDeleted);

    // The edited table reconstructs the same tree.
    let rebuilt = build(&edited).unwrap();
    assert_eq!(flatten(&rebuilt), edited);
}

#[test]
fn rename_propagates_through_flattened_output() {
    let mut tree = build(&sample_rows()).unwrap();

    let renamed = rename_node(&mut tree, "161-00345A", "161-00345B");
    assert_eq!(renamed, 1);

    let table = flatten(&tree);
    // The part itself.
    assert_eq!(table.rows[1].itm.text, "161-00345B");
    assert_eq!(table.rows[1].highlight(), Highlight::Changed);
    // Its assembly got a revision bump, and so did the implicit root stub,
    // which shows up as the PARENT value of both assemblies.
    assert_eq!(table.rows[0].itm.text, "ASSY1-B");
    assert_eq!(table.rows[0].parent, "ROOT-B");
    assert_eq!(table.rows[3].parent, "ROOT-B");
    // The sibling assembly's own identifier is untouched.
    assert_eq!(table.rows[3].itm.text, "ASSY2-A");
    // Children of the renamed assembly now reference its bumped identifier.
    assert_eq!(table.rows[2].parent, "ASSY1-B");
}

#[test]
fn move_then_flatten_preserves_all_other_rows() {
    let mut tree = build(&sample_rows()).unwrap();
    let bolt = tree.find_by_identifier("161-00346A")[0];

    assert!(tree.move_sibling(bolt, Direction::Up));
    let table = flatten(&tree);
    assert_eq!(table.rows[1].itm.text, "161-00346A");
    assert_eq!(table.rows[2].itm.text, "161-00345A");
    // Everything outside the swapped pair keeps its position.
    assert_eq!(table.rows[0].itm.text, "ASSY1-A");
    assert_eq!(table.rows[3].itm.text, "ASSY2-A");
    assert_eq!(table.rows[4].itm.text, "161-00347A");
}

#[test]
fn snapshot_store_drives_the_comparison() {
    let old_table = sample_rows();
    let mut tree = build(&old_table).unwrap();

    let assy2 = tree.find_by_identifier("ASSY2-A")[0];
    tree.add_child_after(assy2, None, "161-00349", Default::default());
    let new_table = flatten(&tree);

    let mut store = SnapshotStore::new();
    store.insert("old", old_table);
    store.insert("new", new_table.clone());

    let result = store.compare_slots("old", "new").unwrap();
    assert!(result.has_differences());
    assert_eq!(result.missing_from_old, vec![5]);
    assert_eq!(result.aligned_old.len(), new_table.len());
    assert_eq!(result.aligned_old.rows[5].highlight(), Highlight::New);
    assert!(result.aligned_old.rows[5].itm.text.is_empty());
}

#[test]
fn comparison_is_positional_not_content_keyed() {
    // A reorder of identical rows produces no reported difference; this
    // pins the index-keyed semantics.
    let old_table = sample_rows();
    let mut reordered = sample_rows();
    reordered.rows.swap(1, 2);

    let result = bom_merge::diff::compare(&old_table, &reordered).unwrap();
    assert!(!result.has_differences());
}

#[test]
fn deleting_an_assembly_removes_its_subtree_rows() {
    let mut tree = build(&sample_rows()).unwrap();
    let assy1 = tree.find_by_identifier("ASSY1-A")[0];
    tree.delete_nodes(&[assy1]);

    let table = flatten(&tree);
    assert_eq!(table.len(), 2);
    assert!(table.rows.iter().all(|r| !r.itm.text.starts_with("161-0034")
        || r.itm.text == "161-00347A"));
}
