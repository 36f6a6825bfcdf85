//! The write cursor: depth-first navigation that creates missing structure.
//!
//! Every navigation call succeeds by construction — descending into a child
//! that does not exist creates it (an `Unused` node, named when navigating by
//! name). The only way a write cursor becomes invalid is popping past the
//! root, which is a programmer error: debug builds assert, release builds
//! degrade to the invalid state and every further call is a no-op.
//!
//! The cursor borrows the tree exclusively, so no other cursor can observe
//! its mutations mid-flight. To hand a position to later code, capture
//! [`WriteCursor::handle`] and re-attach with
//! [`Tree::read_cursor_at`](crate::tree::Tree::read_cursor_at); deletions
//! stale such handles detectably.
//!
//! Sibling moves are linear in the parent's child count: nodes carry no
//! sibling links, so the cursor rescans the parent's child list for its own
//! handle. `to_previous_sibling` at the first child *inserts* a node before
//! index 0, shifting every following child — materially more expensive than
//! the append performed by `to_next_sibling` at the last child.

use std::mem;

use crate::arena::NodeHandle;
use crate::cursor::CursorState;
use crate::node::Node;
use crate::tree::Tree;
use crate::value::{Scalar, Value};

/// Read-write cursor over a [`Tree`]; the primary authoring interface.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    tree: &'a mut Tree,
    state: CursorState,
}

impl<'a> WriteCursor<'a> {
    pub(crate) fn new(tree: &'a mut Tree) -> Self {
        let root = tree.root();
        Self {
            tree,
            state: CursorState::at_root(root),
        }
    }

    /// `false` only after popping past the root.
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// 0 if invalidated, 1 at the root, 2 at one of the root's children,
    /// and so on.
    pub fn depth(&self) -> usize {
        self.state.ancestors().len() + usize::from(self.state.is_valid())
    }

    /// Handle of the focused node, for detached position capture.
    pub fn handle(&self) -> Option<NodeHandle> {
        self.state.node()
    }

    /// The focused node.
    pub fn node(&self) -> Option<&Node> {
        self.state.node().and_then(|h| self.tree.node(h))
    }

    /// Focused handle, debug-asserting validity. Invalid cursors make every
    /// operation a no-op in release builds.
    fn focus(&self) -> Option<NodeHandle> {
        let focus = self.state.node();
        debug_assert!(focus.is_some(), "WriteCursor used after invalidation");
        focus
    }

    //
    // Navigation.
    //

    /// Return to the parent node.
    ///
    /// Calling this at the root is a programmer error: debug builds assert,
    /// release builds invalidate the cursor.
    pub fn to_parent(&mut self) -> &mut Self {
        debug_assert!(
            self.state.parent().is_some(),
            "WriteCursor::to_parent called at the root node"
        );
        self.state = mem::take(&mut self.state).to_parent();
        self
    }

    /// Descend to the first child, creating one if there are none.
    pub fn to_first_child(&mut self) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        let child = match self.tree.child_at(focus, 0) {
            Some(child) => child,
            None => {
                let Ok(child) = self.tree.append_child(focus) else {
                    return self;
                };
                child
            }
        };
        self.state = mem::take(&mut self.state).descend(child);
        self
    }

    /// Descend to the last child, creating one if there are none.
    pub fn to_last_child(&mut self) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        let count = self.tree.child_count(focus);
        let child = if count == 0 {
            let Ok(child) = self.tree.append_child(focus) else {
                return self;
            };
            child
        } else {
            match self.tree.child_at(focus, count - 1) {
                Some(child) => child,
                None => return self,
            }
        };
        self.state = mem::take(&mut self.state).descend(child);
        self
    }

    /// Descend to the child at `index`, appending `Unused` children until
    /// that index exists.
    pub fn to_child_at(&mut self, index: usize) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        while self.tree.child_count(focus) <= index {
            if self.tree.append_child(focus).is_err() {
                return self;
            }
        }
        if let Some(child) = self.tree.child_at(focus, index) {
            self.state = mem::take(&mut self.state).descend(child);
        }
        self
    }

    /// Descend to the first child named `name`, appending a new `Unused`
    /// child with that name if none exists.
    pub fn to_child(&mut self, name: &str) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        let child = match self.tree.child_by_name(focus, name) {
            Some(child) => child,
            None => {
                let Ok(child) = self.tree.append_child(focus) else {
                    return self;
                };
                if let Some(node) = self.tree.node_mut(child) {
                    node.set_name(name);
                }
                child
            }
        };
        self.state = mem::take(&mut self.state).descend(child);
        self
    }

    /// Move to the next sibling, appending one if the focus is the last
    /// child. Linear scan through the parent's child list.
    ///
    /// The root has no siblings; calling this there is a programmer error
    /// (debug assert) and invalidates the cursor.
    pub fn to_next_sibling(&mut self) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        let Some(parent) = self.state.parent() else {
            debug_assert!(
                false,
                "WriteCursor::to_next_sibling called at the root node; roots have no siblings"
            );
            self.state = mem::take(&mut self.state).fail();
            return self;
        };
        let Some(index) = self.tree.child_index(parent, focus) else {
            return self;
        };
        let sibling = match self.tree.child_at(parent, index + 1) {
            Some(sibling) => sibling,
            None => {
                let Ok(sibling) = self.tree.append_child(parent) else {
                    return self;
                };
                sibling
            }
        };
        self.state = mem::take(&mut self.state).with_focus(sibling);
        self
    }

    /// Move to the previous sibling. At the first child this *inserts* a new
    /// node before index 0, shifting all existing children.
    ///
    /// The root has no siblings; calling this there is a programmer error
    /// (debug assert) and invalidates the cursor.
    pub fn to_previous_sibling(&mut self) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        let Some(parent) = self.state.parent() else {
            debug_assert!(
                false,
                "WriteCursor::to_previous_sibling called at the root node; roots have no siblings"
            );
            self.state = mem::take(&mut self.state).fail();
            return self;
        };
        let Some(index) = self.tree.child_index(parent, focus) else {
            return self;
        };
        let sibling = if index == 0 {
            let Ok(sibling) = self.tree.insert_child(parent, 0) else {
                return self;
            };
            sibling
        } else {
            match self.tree.child_at(parent, index - 1) {
                Some(sibling) => sibling,
                None => return self,
            }
        };
        self.state = mem::take(&mut self.state).with_focus(sibling);
        self
    }

    /// Call [`WriteCursor::to_next_sibling`] `count` times, creating
    /// siblings as needed.
    pub fn walk(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.to_next_sibling();
        }
        self
    }

    /// `true` if the focus is its parent's first child (or has no parent).
    pub fn is_first_child(&self) -> bool {
        let (Some(focus), Some(parent)) = (self.state.node(), self.state.parent()) else {
            return true;
        };
        self.tree.child_at(parent, 0) == Some(focus)
    }

    //
    // Mutation.
    //

    /// Make the focused node an `Object`. Existing children are kept.
    pub fn set_object(&mut self) -> &mut Self {
        self.set_focus_value(Value::Object)
    }

    /// Make the focused node an `Array`. Existing children are kept.
    pub fn set_array(&mut self) -> &mut Self {
        self.set_focus_value(Value::Array)
    }

    /// Make the focused node `Null`, destroying any children.
    ///
    /// Not permitted at the root (debug assert; no-op in release).
    pub fn set_null(&mut self) -> &mut Self {
        debug_assert!(
            self.state.parent().is_some() || !self.state.is_valid(),
            "WriteCursor::set_null called at the root; roots must stay containers"
        );
        self.set_focus_value(Value::Null)
    }

    /// Make the focused node a `Bool` carrying `value`, destroying any
    /// children. Type and payload always travel together.
    ///
    /// Not permitted at the root (debug assert; no-op in release).
    pub fn set_bool(&mut self, value: bool) -> &mut Self {
        debug_assert!(
            self.state.parent().is_some() || !self.state.is_valid(),
            "WriteCursor::set_bool called at the root; roots must stay containers"
        );
        self.set_focus_value(Value::Bool(value))
    }

    fn set_focus_value(&mut self, value: Value) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        // Err covers the rejected scalar-at-root case; nothing to do then.
        let _ = self.tree.set_value(focus, value);
        self
    }

    /// Assign the focused node's name, truncating at the name capacity.
    pub fn write_name(&mut self, name: &str) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        if let Some(node) = self.tree.node_mut(focus) {
            node.set_name(name);
        }
        self
    }

    /// Assign a scalar payload (and the matching type) to the focused node,
    /// destroying any children. String payloads truncate at capacity.
    ///
    /// Not permitted at the root (debug assert; no-op in release). No
    /// navigation side effect.
    pub fn write<'v>(&mut self, value: impl Into<Scalar<'v>>) -> &mut Self {
        debug_assert!(
            self.state.parent().is_some() || !self.state.is_valid(),
            "WriteCursor::write called at the root; roots must stay containers"
        );
        self.set_focus_value(value.into().into_value())
    }

    /// Assign name and scalar payload together.
    pub fn write_named<'v>(&mut self, name: &str, value: impl Into<Scalar<'v>>) -> &mut Self {
        self.write_name(name);
        self.write(value)
    }

    /// [`WriteCursor::write`] followed by [`WriteCursor::to_next_sibling`] —
    /// for serializing a sequence positionally.
    pub fn write_and_advance<'v>(&mut self, value: impl Into<Scalar<'v>>) -> &mut Self {
        self.write(value);
        self.to_next_sibling()
    }

    /// [`WriteCursor::write_named`] followed by
    /// [`WriteCursor::to_next_sibling`].
    pub fn write_named_and_advance<'v>(
        &mut self,
        name: &str,
        value: impl Into<Scalar<'v>>,
    ) -> &mut Self {
        self.write_named(name, value);
        self.to_next_sibling()
    }

    /// Append an unnamed `Unused` child. No navigation side effect.
    pub fn create_child(&mut self) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        let _ = self.tree.append_child(focus);
        self
    }

    /// Append an `Unused` child with the given name. No navigation side
    /// effect.
    pub fn create_named_child(&mut self, name: &str) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        if let Ok(child) = self.tree.append_child(focus) {
            if let Some(node) = self.tree.node_mut(child) {
                node.set_name(name);
            }
        }
        self
    }

    /// Append an unnamed `Unused` child and descend into it.
    pub fn create_and_goto_child(&mut self) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        if let Ok(child) = self.tree.append_child(focus) {
            self.state = mem::take(&mut self.state).descend(child);
        }
        self
    }

    /// Append a named `Unused` child and descend into it.
    pub fn create_and_goto_named_child(&mut self, name: &str) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        if let Ok(child) = self.tree.append_child(focus) {
            if let Some(node) = self.tree.node_mut(child) {
                node.set_name(name);
            }
            self.state = mem::take(&mut self.state).descend(child);
        }
        self
    }

    /// Delete up to `count` trailing children of the focused node, subtrees
    /// included. Handles into the deleted subtrees become stale.
    pub fn delete_last_children(&mut self, count: usize) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        for _ in 0..count {
            if self.tree.delete_last_child(focus).is_err() {
                break;
            }
        }
        self
    }

    //
    // Reading. Mirrors the read cursor so authoring code can verify as it
    // writes.
    //

    /// The focused node's name. Debug-asserts validity; `""` when invalid.
    pub fn read_name(&self) -> &str {
        let Some(focus) = self.focus() else {
            return "";
        };
        self.tree.node(focus).map_or("", Node::name)
    }

    /// Unchecked read of a `Bool` payload (see [`Node::get_bool`]).
    pub fn read_bool(&self) -> bool {
        self.focus()
            .and_then(|h| self.tree.node(h))
            .is_some_and(Node::get_bool)
    }

    /// Unchecked read of an `Int` payload (see [`Node::get_int`]).
    pub fn read_int(&self) -> i32 {
        self.focus()
            .and_then(|h| self.tree.node(h))
            .map_or(0, Node::get_int)
    }

    /// Unchecked read of a `Float` payload (see [`Node::get_float`]).
    pub fn read_float(&self) -> f32 {
        self.focus()
            .and_then(|h| self.tree.node(h))
            .map_or(0.0, Node::get_float)
    }

    /// Unchecked read of a `Str` payload (see [`Node::get_str`]).
    pub fn read_str(&self) -> &str {
        self.focus()
            .and_then(|h| self.tree.node(h))
            .map_or("", Node::get_str)
    }

    /// Checked read: `Some` only when the focus is valid and holds a `Bool`.
    pub fn query_bool(&self) -> Option<bool> {
        self.node().and_then(Node::query_bool)
    }

    /// Checked read: `Some` only when the focus is valid and holds an `Int`.
    pub fn query_int(&self) -> Option<i32> {
        self.node().and_then(Node::query_int)
    }

    /// Checked read: `Some` only when the focus is valid and holds a
    /// `Float`.
    pub fn query_float(&self) -> Option<f32> {
        self.node().and_then(Node::query_float)
    }

    /// Checked read: `Some` only when the focus is valid and holds a `Str`.
    pub fn query_str(&self) -> Option<&str> {
        self.node().and_then(Node::query_str)
    }
}
