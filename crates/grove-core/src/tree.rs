//! The tree itself: arena ownership, one root node, cursor factories, and
//! the handle-level structural operations the cursors are built on.
//!
//! The root is always a container (`Object` or `Array`); it is created as an
//! empty `Object` carrying the sentinel name [`ROOT_NAME`], and
//! [`Tree::clear`] discards its children while keeping its type and name.
//!
//! # Depth
//!
//! Trees are intended for shallow documents; [`MAX_DEPTH`] records the
//! intended bound. It is documented rather than enforced: no operation
//! checks it, matching the behavior this crate standardizes on. Callers that
//! need a hard bound must impose it themselves.
//!
//! # Handle stability
//!
//! Appending and inserting children never moves existing nodes, so handles
//! captured from a cursor stay valid across those mutations. Deleting a
//! child (or changing a container to a scalar kind) destroys the affected
//! subtree and stales every handle into it; later lookups through such a
//! handle report [`TreeError::StaleHandle`] instead of reading freed data.

use crate::arena::{Arena, NodeHandle};
use crate::error::{Result, TreeError};
use crate::node::Node;
use crate::reader::ReadCursor;
use crate::value::Value;
use crate::writer::WriteCursor;

/// Intended maximum nesting depth (root = depth 1). Documented, not enforced.
pub const MAX_DEPTH: usize = 7;

/// Sentinel name given to a freshly created root node.
pub const ROOT_NAME: &str = "UNNAMED";

/// A schema-less hierarchical value tree.
///
/// Cloning a tree deep-copies every node (the arena is value storage), which
/// is the supported way to snapshot a document.
#[derive(Debug, Clone)]
pub struct Tree {
    arena: Arena,
    root: NodeHandle,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// An empty tree: a childless `Object` root named [`ROOT_NAME`].
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let mut node = Node::named(ROOT_NAME);
        node.set_value(Value::Object);
        let root = arena.insert(node);
        Self { arena, root }
    }

    /// Handle of the root node. Always live.
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    /// Discard all root children. Root type and name persist.
    pub fn clear(&mut self) {
        // Root is live by construction; the error arm is unreachable.
        let _ = self.delete_all_children(self.root);
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Resolve a handle. `None` if stale.
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.arena.get(handle)
    }

    /// Resolve a handle mutably. `None` if stale. Only name edits are
    /// exposed on `&mut Node`; payload and child mutations go through the
    /// tree so subtree destruction stays explicit.
    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.arena.get_mut(handle)
    }

    /// Resolve a handle, reporting staleness as an error.
    pub fn try_node(&self, handle: NodeHandle) -> Result<&Node> {
        self.arena.get(handle).ok_or(TreeError::StaleHandle)
    }

    /// `true` if the handle still resolves.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.arena.contains(handle)
    }

    /// A write cursor focused on the root. Exclusive: no other cursor can
    /// coexist with it.
    pub fn write_cursor(&mut self) -> WriteCursor<'_> {
        WriteCursor::new(self)
    }

    /// A read cursor focused on the root.
    pub fn read_cursor(&self) -> ReadCursor<'_> {
        ReadCursor::new(self)
    }

    /// A read cursor re-attached at a previously captured handle.
    ///
    /// The cursor starts with an empty ancestor stack — it does not know how
    /// the handle was reached, so `to_parent` from the attachment point
    /// invalidates it. Reports [`TreeError::StaleHandle`] if the node is
    /// gone.
    pub fn read_cursor_at(&self, handle: NodeHandle) -> Result<ReadCursor<'_>> {
        self.try_node(handle)?;
        Ok(ReadCursor::at(self, handle))
    }

    //
    // Structural operations.
    //

    /// Append a fresh `Unused` child to `parent`, forcing `parent` to
    /// `Object` first if it was not already a container.
    pub fn append_child(&mut self, parent: NodeHandle) -> Result<NodeHandle> {
        self.force_container(parent)?;
        let child = self.arena.insert(Node::new());
        if let Some(node) = self.arena.get_mut(parent) {
            node.children_mut().push(child);
        }
        Ok(child)
    }

    /// Insert a fresh `Unused` child at `index`, shifting later children.
    /// `index` is clamped to the child count (debug builds assert instead).
    pub fn insert_child(&mut self, parent: NodeHandle, index: usize) -> Result<NodeHandle> {
        self.force_container(parent)?;
        let child = self.arena.insert(Node::new());
        if let Some(node) = self.arena.get_mut(parent) {
            debug_assert!(
                index <= node.child_count(),
                "insert_child index {} past child count {}",
                index,
                node.child_count()
            );
            let index = index.min(node.child_count());
            node.children_mut().insert(index, child);
        }
        Ok(child)
    }

    /// Delete the last child (and its whole subtree). No-op when childless.
    pub fn delete_last_child(&mut self, parent: NodeHandle) -> Result<()> {
        let node = self.arena.get_mut(parent).ok_or(TreeError::StaleHandle)?;
        if let Some(child) = node.children_mut().pop() {
            self.arena.remove_subtree(child);
        }
        Ok(())
    }

    /// Delete every child subtree of `parent`.
    pub fn delete_all_children(&mut self, parent: NodeHandle) -> Result<()> {
        let node = self.arena.get_mut(parent).ok_or(TreeError::StaleHandle)?;
        let children = node.take_children();
        for child in children {
            self.arena.remove_subtree(child);
        }
        Ok(())
    }

    /// Number of children of `parent` (0 if the handle is stale).
    pub fn child_count(&self, parent: NodeHandle) -> usize {
        self.arena.get(parent).map_or(0, Node::child_count)
    }

    /// Handle of the child at `index`.
    pub fn child_at(&self, parent: NodeHandle, index: usize) -> Option<NodeHandle> {
        self.arena.get(parent)?.child_at(index)
    }

    /// First child whose name matches. Duplicate names are a caller error;
    /// the first match wins. Linear in the number of children.
    pub fn child_by_name(&self, parent: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.arena.get(parent)?;
        node.children()
            .iter()
            .copied()
            .find(|&child| self.arena.get(child).is_some_and(|c| c.name() == name))
    }

    /// Position of `child` in `parent`'s child list, by handle equality.
    /// Linear in the number of children.
    pub fn child_index(&self, parent: NodeHandle, child: NodeHandle) -> Option<usize> {
        self.arena
            .get(parent)?
            .children()
            .iter()
            .position(|&c| c == child)
    }

    /// Replace a node's payload.
    ///
    /// Changing a container to a scalar kind destroys all of its children
    /// immediately; switching between `Object` and `Array` keeps them.
    /// Assigning a non-container payload to the root is rejected with
    /// [`TreeError::RootMustBeContainer`].
    pub fn set_value(&mut self, handle: NodeHandle, value: Value) -> Result<()> {
        if !value.is_container() && handle == self.root {
            return Err(TreeError::RootMustBeContainer);
        }
        let node = self.arena.get_mut(handle).ok_or(TreeError::StaleHandle)?;
        if value.is_container() {
            node.set_value(value);
            return Ok(());
        }
        let children = node.take_children();
        node.set_value(value);
        for child in children {
            self.arena.remove_subtree(child);
        }
        Ok(())
    }

    /// Force `handle` to a container kind (to `Object` if it was scalar).
    fn force_container(&mut self, handle: NodeHandle) -> Result<()> {
        let node = self.arena.get_mut(handle).ok_or(TreeError::StaleHandle)?;
        if !node.is_container() {
            // Scalar nodes have no children by invariant, nothing to free.
            node.set_value(Value::Object);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn new_tree_has_container_root_with_sentinel_name() {
        let tree = Tree::new();
        let root = tree.node(tree.root()).unwrap();
        assert_eq!(root.kind(), ValueKind::Object);
        assert_eq!(root.name(), ROOT_NAME);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn clear_keeps_root_type_and_name() {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.append_child(root).unwrap();
        tree.append_child(root).unwrap();
        tree.clear();
        let root_node = tree.node(root).unwrap();
        assert_eq!(root_node.child_count(), 0);
        assert_eq!(root_node.kind(), ValueKind::Object);
        assert_eq!(root_node.name(), ROOT_NAME);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn scalar_root_is_rejected() {
        let mut tree = Tree::new();
        let root = tree.root();
        let err = tree.set_value(root, Value::Int(1)).unwrap_err();
        assert!(matches!(err, TreeError::RootMustBeContainer));
        // Object <-> Array at the root is fine.
        tree.set_value(root, Value::Array).unwrap();
        assert_eq!(tree.node(root).unwrap().kind(), ValueKind::Array);
    }

    #[test]
    fn container_switch_keeps_children_scalar_destroys_them() {
        let mut tree = Tree::new();
        let root = tree.root();
        let child = tree.append_child(root).unwrap();
        let grandchild = tree.append_child(child).unwrap();

        tree.set_value(child, Value::Array).unwrap();
        assert!(tree.contains(grandchild));

        tree.set_value(child, Value::Int(9)).unwrap();
        assert!(!tree.contains(grandchild));
        assert_eq!(tree.child_count(child), 0);
    }

    #[test]
    fn append_forces_scalar_parent_to_object() {
        let mut tree = Tree::new();
        let root = tree.root();
        let child = tree.append_child(root).unwrap();
        tree.set_value(child, Value::Int(3)).unwrap();
        tree.append_child(child).unwrap();
        assert_eq!(tree.node(child).unwrap().kind(), ValueKind::Object);
        assert_eq!(tree.child_count(child), 1);
    }

    #[test]
    fn insert_child_shifts_later_children() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.append_child(root).unwrap();
        let b = tree.append_child(root).unwrap();
        let inserted = tree.insert_child(root, 1).unwrap();
        assert_eq!(tree.child_at(root, 0), Some(a));
        assert_eq!(tree.child_at(root, 1), Some(inserted));
        assert_eq!(tree.child_at(root, 2), Some(b));
        // Handles were not disturbed by the insertion.
        assert!(tree.contains(a));
        assert!(tree.contains(b));
    }

    #[test]
    fn child_by_name_returns_first_match() {
        let mut tree = Tree::new();
        let root = tree.root();
        let first = tree.append_child(root).unwrap();
        tree.node_mut(first).unwrap().set_name("dup");
        let second = tree.append_child(root).unwrap();
        tree.node_mut(second).unwrap().set_name("dup");

        assert_eq!(tree.child_by_name(root, "dup"), Some(first));
        assert_eq!(tree.child_by_name(root, "missing"), None);
    }

    #[test]
    fn deleting_a_child_stales_handles_into_its_subtree() {
        let mut tree = Tree::new();
        let root = tree.root();
        let child = tree.append_child(root).unwrap();
        let grandchild = tree.append_child(child).unwrap();

        tree.delete_last_child(root).unwrap();
        assert!(matches!(tree.try_node(child), Err(TreeError::StaleHandle)));
        assert!(matches!(
            tree.try_node(grandchild),
            Err(TreeError::StaleHandle)
        ));
        assert!(tree.read_cursor_at(child).is_err());
    }
}
