//! Write cursor contract tests: creating navigation, write family,
//! type-changing mutations, and deletion.

use grove_core::{Tree, ValueKind};

// ============================================================================
// Creating navigation
// ============================================================================

#[test]
fn to_child_creates_missing_named_child() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("settings");
    assert!(writer.is_valid());
    assert_eq!(writer.depth(), 2);
    assert_eq!(writer.read_name(), "settings");
    assert_eq!(writer.node().unwrap().kind(), ValueKind::Unused);
}

#[test]
fn to_child_reuses_existing_named_child() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("a");
    writer.write(1);
    writer.to_parent().to_child("a");
    assert_eq!(writer.query_int(), Some(1));
    drop(writer);
    assert_eq!(tree.child_count(tree.root()), 1);
}

#[test]
fn to_child_at_pads_with_unused_children() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child_at(3);
    assert!(writer.is_valid());
    assert_eq!(writer.depth(), 2);
    drop(writer);
    assert_eq!(tree.child_count(tree.root()), 4);
}

#[test]
fn to_first_and_last_child_create_when_childless() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_first_child();
    assert_eq!(writer.depth(), 2);
    writer.to_parent().to_last_child();
    assert_eq!(writer.depth(), 2);
    drop(writer);
    // Both calls found/created within the same single child.
    assert_eq!(tree.child_count(tree.root()), 1);
}

#[test]
fn to_last_child_picks_the_last_existing() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.create_named_child("first").create_named_child("last");
    writer.to_last_child();
    assert_eq!(writer.read_name(), "last");
}

#[test]
fn to_next_sibling_appends_past_the_end() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_first_child();
    writer.to_next_sibling().to_next_sibling();
    assert!(writer.is_valid());
    assert_eq!(writer.depth(), 2);
    drop(writer);
    assert_eq!(tree.child_count(tree.root()), 3);
}

#[test]
fn to_previous_sibling_at_boundary_inserts_before_first() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("a");
    writer.to_parent().to_child("b");
    writer.to_parent().to_child("a");
    writer.to_previous_sibling();
    assert!(writer.is_valid());
    assert_eq!(writer.read_name(), "");
    drop(writer);

    // The new node shifted "a" and "b" one slot to the right.
    let root = tree.root();
    let names: Vec<String> = (0..tree.child_count(root))
        .map(|i| {
            let h = tree.child_at(root, i).unwrap();
            tree.node(h).unwrap().name().to_string()
        })
        .collect();
    assert_eq!(names, ["", "a", "b"]);
}

#[test]
fn walk_advances_multiple_siblings() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_first_child();
    writer.walk(4);
    assert!(writer.is_valid());
    drop(writer);
    assert_eq!(tree.child_count(tree.root()), 5);
}

#[test]
fn navigation_never_invalidates_below_root() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer
        .to_child("a")
        .to_child_at(2)
        .to_first_child()
        .to_next_sibling()
        .to_last_child()
        .to_previous_sibling();
    assert!(writer.is_valid());
    assert_eq!(writer.depth(), 5);
}

#[test]
fn depth_counts_root_as_one() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    assert_eq!(writer.depth(), 1);
    writer.to_child("a").to_child("b");
    assert_eq!(writer.depth(), 3);
    writer.to_parent();
    assert_eq!(writer.depth(), 2);
}

#[test]
fn is_first_child_tracks_position() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    assert!(writer.is_first_child()); // root: no parent
    writer.to_first_child();
    assert!(writer.is_first_child());
    writer.to_next_sibling();
    assert!(!writer.is_first_child());
}

// ============================================================================
// Write family
// ============================================================================

#[test]
fn write_assigns_type_and_payload_together() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("n");
    writer.write(42);
    assert_eq!(writer.query_int(), Some(42));
    writer.write(2.5f32);
    assert_eq!(writer.query_float(), Some(2.5));
    assert_eq!(writer.query_int(), None);
    writer.write("text");
    assert_eq!(writer.query_str(), Some("text"));
    writer.write(true);
    assert_eq!(writer.query_bool(), Some(true));
}

#[test]
fn write_named_sets_both_name_and_payload() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_first_child();
    writer.write_named("answer", 41);
    assert_eq!(writer.read_name(), "answer");
    assert_eq!(writer.read_int(), 41);
}

#[test]
fn write_and_advance_fills_an_array_positionally() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.set_array();
    writer.to_first_child();
    writer
        .write_and_advance(10)
        .write_and_advance(20)
        .write(30);
    drop(writer);

    let mut reader = tree.read_cursor();
    reader.to_first_child();
    assert_eq!(reader.read_int_and_advance(), 10);
    assert_eq!(reader.read_int_and_advance(), 20);
    assert_eq!(reader.read_int(), 30);
}

#[test]
fn write_name_truncates_long_names() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_first_child();
    let long = "n".repeat(64);
    writer.write_name(&long);
    assert_eq!(writer.read_name().chars().count(), grove_core::NAME_CAPACITY);
}

#[test]
fn write_truncates_long_strings() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_first_child();
    let long = "s".repeat(200);
    writer.write(long.as_str());
    let stored = writer.query_str().unwrap();
    assert_eq!(stored.chars().count(), grove_core::STRING_CAPACITY);
    assert!(long.starts_with(stored));
}

// ============================================================================
// Type setters
// ============================================================================

#[test]
fn set_bool_pairs_type_and_value() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("flag");
    writer.set_bool(false);
    assert_eq!(writer.node().unwrap().kind(), ValueKind::Bool);
    assert_eq!(writer.query_bool(), Some(false));
}

#[test]
fn set_null_destroys_children() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("group");
    writer.to_child("inner");
    writer.write(1);
    writer.to_parent();
    assert_eq!(writer.node().unwrap().child_count(), 1);
    writer.set_null();
    assert!(writer.node().unwrap().is_null());
    assert_eq!(writer.node().unwrap().child_count(), 0);
}

#[test]
fn object_array_switch_keeps_children() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("list");
    writer.to_child_at(1);
    writer.to_parent();
    writer.set_array();
    assert_eq!(writer.node().unwrap().kind(), ValueKind::Array);
    assert_eq!(writer.node().unwrap().child_count(), 2);
    writer.set_object();
    assert_eq!(writer.node().unwrap().child_count(), 2);
}

#[test]
fn scalar_write_destroys_children() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.to_child("group");
    writer.to_child("inner");
    writer.to_parent();
    writer.write(7);
    assert_eq!(writer.node().unwrap().kind(), ValueKind::Int);
    assert_eq!(writer.node().unwrap().child_count(), 0);
}

// ============================================================================
// Child creation and deletion
// ============================================================================

#[test]
fn create_child_has_no_navigation_side_effect() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.create_child().create_named_child("named");
    assert_eq!(writer.depth(), 1);
    drop(writer);
    let root = tree.root();
    assert_eq!(tree.child_count(root), 2);
    let named = tree.child_at(root, 1).unwrap();
    assert_eq!(tree.node(named).unwrap().name(), "named");
}

#[test]
fn create_and_goto_child_descends() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer.create_and_goto_named_child("inner");
    assert_eq!(writer.depth(), 2);
    assert_eq!(writer.read_name(), "inner");
}

#[test]
fn delete_last_children_trims_from_the_end() {
    let mut tree = Tree::new();
    let mut writer = tree.write_cursor();
    writer
        .create_named_child("a")
        .create_named_child("b")
        .create_named_child("c");
    writer.delete_last_children(2);
    assert_eq!(writer.node().unwrap().child_count(), 1);
    // Deleting more than exist is a silent no-op.
    writer.delete_last_children(10);
    assert_eq!(writer.node().unwrap().child_count(), 0);
}
