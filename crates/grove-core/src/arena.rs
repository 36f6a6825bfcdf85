//! Generational slab storage for tree nodes.
//!
//! Nodes live in slots addressed by [`NodeHandle`], a (index, generation)
//! pair. Removing a node bumps its slot's generation, so a handle captured
//! before the removal no longer resolves: stale references are detected and
//! reported instead of dangling. Appending or inserting nodes never moves
//! existing ones, so live handles stay valid across those mutations.

use crate::node::Node;

/// A stable, generation-tagged reference to a node in a tree.
///
/// Handles are cheap to copy and compare. A handle resolves only while the
/// node it was taken from is still alive; once the node is deleted (directly,
/// or as part of a destroyed subtree) the handle is *stale* and every lookup
/// through it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Slab of nodes with generation-checked access.
#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store a node, reusing a freed slot when one is available.
    pub(crate) fn insert(&mut self, node: Node) -> NodeHandle {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.node.is_none(), "free list referenced a live slot");
            slot.node = Some(node);
            NodeHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeHandle {
                index,
                generation: 1,
            }
        }
    }

    /// Resolve a handle. `None` if the handle is stale.
    pub(crate) fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Resolve a handle mutably. `None` if the handle is stale.
    pub(crate) fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// `true` if the handle still resolves to a live node.
    pub(crate) fn contains(&self, handle: NodeHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Remove a single node, bumping the slot generation so the handle (and
    /// any copies of it) becomes stale. Returns the node, or `None` if the
    /// handle was already stale.
    pub(crate) fn remove(&mut self, handle: NodeHandle) -> Option<Node> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation || slot.node.is_none() {
            return None;
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.live -= 1;
        slot.node.take()
    }

    /// Remove a node and every node reachable through its child lists.
    /// Iterative, so pathological depth cannot overflow the call stack.
    pub(crate) fn remove_subtree(&mut self, handle: NodeHandle) {
        let mut pending = vec![handle];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.remove(next) {
                pending.extend(node.into_children());
            }
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut arena = Arena::new();
        let h = arena.insert(Node::named("a"));
        assert_eq!(arena.get(h).map(Node::name), Some("a"));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn removed_handle_is_stale() {
        let mut arena = Arena::new();
        let h = arena.insert(Node::new());
        assert!(arena.remove(h).is_some());
        assert!(!arena.contains(h));
        assert!(arena.remove(h).is_none());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn reused_slot_does_not_resurrect_old_handle() {
        let mut arena = Arena::new();
        let old = arena.insert(Node::named("old"));
        arena.remove(old);
        let new = arena.insert(Node::named("new"));
        // Same slot, different generation.
        assert_ne!(old, new);
        assert!(arena.get(old).is_none());
        assert_eq!(arena.get(new).map(Node::name), Some("new"));
    }

    #[test]
    fn remove_subtree_frees_descendants() {
        let mut arena = Arena::new();
        let root = arena.insert(Node::new());
        let child = arena.insert(Node::new());
        let grandchild = arena.insert(Node::new());
        if let Some(n) = arena.get_mut(child) {
            n.children_mut().push(grandchild);
        }
        if let Some(n) = arena.get_mut(root) {
            n.children_mut().push(child);
        }

        arena.remove_subtree(root);
        assert!(!arena.contains(root));
        assert!(!arena.contains(child));
        assert!(!arena.contains(grandchild));
        assert_eq!(arena.len(), 0);
    }
}
