//! The tree node: bounded name, payload, ordered child handles.
//!
//! A node knows nothing about its parent or siblings; all upward navigation
//! is the cursors' job. The child list is only meaningful when the payload is
//! a container kind (`Object` or `Array`) — structural operations that change
//! a node to a scalar kind destroy its children explicitly (see
//! [`Tree::set_value`](crate::tree::Tree::set_value)).
//!
//! By convention, object children carry unique non-empty names and array
//! children are unnamed. Neither is enforced; name lookups return the first
//! match and treat duplicates as a caller error.

use crate::arena::NodeHandle;
use crate::bounded::{BoundedString, NAME_CAPACITY};
use crate::value::{Value, ValueKind};

/// Bounded string used for node names.
pub type NodeName = BoundedString<NAME_CAPACITY>;

/// A single node in a value tree.
#[derive(Debug, Clone, Default)]
pub struct Node {
    name: NodeName,
    value: Value,
    children: Vec<NodeHandle>,
}

impl Node {
    /// A fresh unnamed node with an `Unused` payload.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A fresh `Unused` node with the given name (truncated at capacity).
    pub(crate) fn named(name: &str) -> Self {
        let mut node = Self::default();
        node.set_name(name);
        node
    }

    /// The node's name (empty for unnamed nodes).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Assign a name, truncating at [`NAME_CAPACITY`] characters.
    ///
    /// Returns `true` if the whole name fit, `false` if it was truncated.
    pub fn set_name(&mut self, name: &str) -> bool {
        self.name.set(name)
    }

    /// Assign at most `max_len` characters of `name`, further capped at
    /// [`NAME_CAPACITY`].
    pub fn set_name_bounded(&mut self, name: &str, max_len: usize) -> bool {
        self.name.set_bounded(name, max_len)
    }

    /// The payload's type tag.
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// The payload itself.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// `true` if this node may carry children (`Object` or `Array`).
    pub fn is_container(&self) -> bool {
        self.value.is_container()
    }

    /// `true` if the payload is `Null`.
    pub fn is_null(&self) -> bool {
        self.value.kind() == ValueKind::Null
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// `true` if at least one child exists.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Handle of the child at `index`, if it exists.
    pub fn child_at(&self, index: usize) -> Option<NodeHandle> {
        self.children.get(index).copied()
    }

    /// The ordered child handle list.
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Replace the payload. Does not touch the child list; callers that
    /// change away from a container kind must destroy the children
    /// themselves, which is why this is crate-internal.
    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeHandle> {
        &mut self.children
    }

    pub(crate) fn take_children(&mut self) -> Vec<NodeHandle> {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn into_children(self) -> Vec<NodeHandle> {
        self.children
    }

    /// Checked payload read; see [`Value::query_bool`].
    pub fn query_bool(&self) -> Option<bool> {
        self.value.query_bool()
    }

    /// Checked payload read; see [`Value::query_int`].
    pub fn query_int(&self) -> Option<i32> {
        self.value.query_int()
    }

    /// Checked payload read; see [`Value::query_float`].
    pub fn query_float(&self) -> Option<f32> {
        self.value.query_float()
    }

    /// Checked payload read; see [`Value::query_str`].
    pub fn query_str(&self) -> Option<&str> {
        self.value.query_str()
    }

    /// Unchecked payload read; see [`Value::get_bool`].
    pub fn get_bool(&self) -> bool {
        self.value.get_bool()
    }

    /// Unchecked payload read; see [`Value::get_int`].
    pub fn get_int(&self) -> i32 {
        self.value.get_int()
    }

    /// Unchecked payload read; see [`Value::get_float`].
    pub fn get_float(&self) -> f32 {
        self.value.get_float()
    }

    /// Unchecked payload read; see [`Value::get_str`].
    pub fn get_str(&self) -> &str {
        self.value.get_str()
    }
}
