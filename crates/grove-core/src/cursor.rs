//! Shared cursor position state.
//!
//! Both cursor kinds are a focused node plus the ancestor chain back to the
//! root (excluding the focus). Invalidation is an explicit variant, not a
//! nullable field, and every transition is a total function from state to
//! state — popping past the root or failing a descent lands in `Invalid`
//! rather than panicking.
//!
//! An invalid state keeps its ancestor stack: a reader that failed a descent
//! can pop back up to the last valid ancestor and continue.

use crate::arena::NodeHandle;

#[derive(Debug, Clone)]
pub(crate) enum CursorState {
    Valid {
        node: NodeHandle,
        ancestors: Vec<NodeHandle>,
    },
    Invalid {
        ancestors: Vec<NodeHandle>,
    },
}

impl Default for CursorState {
    fn default() -> Self {
        CursorState::Invalid {
            ancestors: Vec::new(),
        }
    }
}

impl CursorState {
    /// Valid state focused on `root` with no ancestors.
    pub(crate) fn at_root(root: NodeHandle) -> Self {
        CursorState::Valid {
            node: root,
            ancestors: Vec::new(),
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        matches!(self, CursorState::Valid { .. })
    }

    /// The focused node, if any.
    pub(crate) fn node(&self) -> Option<NodeHandle> {
        match self {
            CursorState::Valid { node, .. } => Some(*node),
            CursorState::Invalid { .. } => None,
        }
    }

    /// Ancestors from root down to (excluding) the focus. Retained while
    /// invalid.
    pub(crate) fn ancestors(&self) -> &[NodeHandle] {
        match self {
            CursorState::Valid { ancestors, .. } | CursorState::Invalid { ancestors } => ancestors,
        }
    }

    /// The immediate parent of the focus (top of the ancestor stack).
    pub(crate) fn parent(&self) -> Option<NodeHandle> {
        self.ancestors().last().copied()
    }

    fn into_ancestors(self) -> Vec<NodeHandle> {
        match self {
            CursorState::Valid { ancestors, .. } | CursorState::Invalid { ancestors } => ancestors,
        }
    }

    /// Pop to the parent. With an empty ancestor stack this lands in
    /// `Invalid`; from `Invalid` with ancestors it restores validity at the
    /// nearest ancestor.
    pub(crate) fn to_parent(self) -> Self {
        let mut ancestors = self.into_ancestors();
        match ancestors.pop() {
            Some(node) => CursorState::Valid { node, ancestors },
            None => CursorState::Invalid { ancestors },
        }
    }

    /// Descend from a valid focus onto `child`. No-op when invalid.
    pub(crate) fn descend(self, child: NodeHandle) -> Self {
        match self {
            CursorState::Valid {
                node,
                mut ancestors,
            } => {
                ancestors.push(node);
                CursorState::Valid {
                    node: child,
                    ancestors,
                }
            }
            invalid => invalid,
        }
    }

    /// Record a failed descent: the focus joins the ancestor stack and the
    /// state becomes `Invalid`, so one `to_parent` recovers. No-op when
    /// already invalid.
    pub(crate) fn descend_failed(self) -> Self {
        match self {
            CursorState::Valid {
                node,
                mut ancestors,
            } => {
                ancestors.push(node);
                CursorState::Invalid { ancestors }
            }
            invalid => invalid,
        }
    }

    /// Move the focus to a sibling, keeping the ancestor stack.
    pub(crate) fn with_focus(self, sibling: NodeHandle) -> Self {
        CursorState::Valid {
            node: sibling,
            ancestors: self.into_ancestors(),
        }
    }

    /// Drop the focus, keeping the ancestor stack (missing sibling).
    pub(crate) fn fail(self) -> Self {
        CursorState::Invalid {
            ancestors: self.into_ancestors(),
        }
    }
}
