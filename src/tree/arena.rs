//! [`Arena`]: owns every node ever allocated and hands out stable
//! [`NodeId`] handles in place of raw pointers.
//!
//! Nodes are never freed by the tree (see `spec.md` §3, Lifecycle):
//! `pop`/`remove`/`clear` only rewire links. This sidesteps reference-cycle
//! ownership entirely — the arena needs only linear memory, and a node's
//! "structure" is whatever is reachable from some externally-held root
//! handle, not a property the arena tracks itself.

use crate::base::SyntaxRange;

use super::node::{Links, Node, Side};

/// Owns a collection of [`Node`]s addressed by [`NodeId`].
#[derive(Debug, Default)]
pub struct Arena<T> {
    nodes: Vec<Node<T>>,
}

pub use super::node::NodeId;

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a new, unlinked node with a fixed range/weight.
    pub fn insert(&mut self, value: T, range: SyntaxRange) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(Node::new(value, range));
        id
    }

    /// As [`Self::insert`], with `weight` defaulted to `0`.
    pub fn insert_at(&mut self, value: T, offset: u32, length: u32) -> NodeId {
        self.insert(value, SyntaxRange::new(offset, length, 0))
    }

    pub fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    pub fn range(&self, id: NodeId) -> SyntaxRange {
        self.get(id).range()
    }

    pub fn links(&self, id: NodeId) -> Links {
        self.get(id).links()
    }

    pub(crate) fn neighbor(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.get(id).links.get(side)
    }

    pub(crate) fn set_neighbor(&mut self, id: NodeId, side: Side, value: Option<NodeId>) {
        self.get_mut(id).links.set(side, value);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut arena: Arena<&str> = Arena::new();
        let a = arena.insert("a", SyntaxRange::new(0, 1, 0));
        let b = arena.insert("b", SyntaxRange::new(1, 1, 0));
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).value, "a");
        assert_eq!(arena.get(b).value, "b");
    }

    #[test]
    fn fresh_node_is_isolated() {
        let mut arena: Arena<()> = Arena::new();
        let id = arena.insert((), SyntaxRange::new(0, 1, 0));
        assert!(arena.links(id).is_isolated());
    }
}
