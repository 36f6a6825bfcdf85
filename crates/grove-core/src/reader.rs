//! The read cursor: strict navigation that never creates structure.
//!
//! Where the write cursor creates missing children, the read cursor fails
//! into an explicit invalid state: the focus is dropped but the ancestor
//! stack is kept, so a single `to_parent` recovers at the last valid
//! position. Checking [`ReadCursor::is_valid`] after boundary navigation is
//! normal control flow, not error handling.
//!
//! Cursors are cheap to clone; a clone navigates independently. The
//! [`LenientReadCursor`](crate::lenient::LenientReadCursor) accessors rely on
//! this to probe children without moving.

use std::mem;

use crate::arena::NodeHandle;
use crate::cursor::CursorState;
use crate::node::Node;
use crate::tree::Tree;

/// Read-only cursor over a [`Tree`].
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    tree: &'a Tree,
    state: CursorState,
}

impl<'a> ReadCursor<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            state: CursorState::at_root(tree.root()),
        }
    }

    /// Re-attach at a captured handle. The ancestor stack starts empty.
    pub(crate) fn at(tree: &'a Tree, handle: NodeHandle) -> Self {
        Self {
            tree,
            state: CursorState::at_root(handle),
        }
    }

    /// `true` while the cursor has a focused node.
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// −1 if invalidated past the root, 0 at the root (or while invalid just
    /// below it), 1 at one of the root's children, and so on.
    ///
    /// Note the offset from [`WriteCursor::depth`](crate::writer::WriteCursor::depth):
    /// the reader counts the root as 0.
    pub fn depth(&self) -> isize {
        self.state.ancestors().len() as isize - 1 + isize::from(self.state.is_valid())
    }

    /// Handle of the focused node, for detached position capture.
    pub fn handle(&self) -> Option<NodeHandle> {
        self.state.node()
    }

    /// The focused node.
    pub fn node(&self) -> Option<&Node> {
        self.state.node().and_then(|h| self.tree.node(h))
    }

    /// Focused handle; navigation downward from an invalid cursor is a
    /// programmer error (recover with `to_parent` first).
    fn focus(&self) -> Option<NodeHandle> {
        let focus = self.state.node();
        debug_assert!(
            focus.is_some(),
            "ReadCursor navigated while invalid; call to_parent to recover first"
        );
        focus
    }

    //
    // Navigation.
    //

    /// Return to the parent node. At the root this invalidates the cursor;
    /// from an invalid state it recovers to the nearest surviving ancestor.
    pub fn to_parent(&mut self) -> &mut Self {
        self.state = mem::take(&mut self.state).to_parent();
        self
    }

    /// Descend to the first child, or invalidate if there are none.
    pub fn to_first_child(&mut self) -> &mut Self {
        self.descend_to(|tree, focus| tree.child_at(focus, 0))
    }

    /// Descend to the last child, or invalidate if there are none.
    pub fn to_last_child(&mut self) -> &mut Self {
        self.descend_to(|tree, focus| {
            let count = tree.child_count(focus);
            count.checked_sub(1).and_then(|i| tree.child_at(focus, i))
        })
    }

    /// Descend to the child at `index`, or invalidate if out of range.
    pub fn to_child_at(&mut self, index: usize) -> &mut Self {
        self.descend_to(|tree, focus| tree.child_at(focus, index))
    }

    /// Descend to the first child named `name`, or invalidate if absent.
    pub fn to_child(&mut self, name: &str) -> &mut Self {
        self.descend_to(|tree, focus| tree.child_by_name(focus, name))
    }

    fn descend_to(
        &mut self,
        pick: impl FnOnce(&Tree, NodeHandle) -> Option<NodeHandle>,
    ) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        self.state = match pick(self.tree, focus) {
            Some(child) => mem::take(&mut self.state).descend(child),
            None => mem::take(&mut self.state).descend_failed(),
        };
        self
    }

    /// Move to the next sibling, or invalidate if the focus is the last
    /// child (or the root, which has no siblings). Linear scan through the
    /// parent's child list; `to_parent` recovers at the parent.
    pub fn to_next_sibling(&mut self) -> &mut Self {
        self.to_sibling(1)
    }

    /// Move to the previous sibling, or invalidate at the first child.
    pub fn to_previous_sibling(&mut self) -> &mut Self {
        self.to_sibling(-1)
    }

    fn to_sibling(&mut self, offset: isize) -> &mut Self {
        let Some(focus) = self.focus() else {
            return self;
        };
        let Some(parent) = self.state.parent() else {
            // Root has no siblings.
            self.state = mem::take(&mut self.state).fail();
            return self;
        };
        let sibling = self
            .tree
            .child_index(parent, focus)
            .and_then(|index| index.checked_add_signed(offset))
            .and_then(|index| self.tree.child_at(parent, index));
        self.state = match sibling {
            Some(sibling) => mem::take(&mut self.state).with_focus(sibling),
            None => mem::take(&mut self.state).fail(),
        };
        self
    }

    //
    // Reading.
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

    /// Unchecked read followed by `to_next_sibling`.
    pub fn read_bool_and_advance(&mut self) -> bool {
        let value = self.read_bool();
        self.to_next_sibling();
        value
    }

    /// Unchecked read followed by `to_next_sibling`.
    pub fn read_int_and_advance(&mut self) -> i32 {
        let value = self.read_int();
        self.to_next_sibling();
        value
    }

    /// Unchecked read followed by `to_next_sibling`.
    pub fn read_float_and_advance(&mut self) -> f32 {
        let value = self.read_float();
        self.to_next_sibling();
        value
    }
}
