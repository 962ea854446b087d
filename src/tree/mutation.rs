//! Structural mutators: [`Arena::pop`], [`Arena::remove`], [`Arena::clear`].
//!
//! All three first detach `id` from whatever parent/sibling slot it
//! occupies; they differ in what happens to `id`'s own children and to
//! `id` itself. Each checks the "flipped T" invariant (`top` and `left`
//! both set) as it walks and fails with [`TreeError::Corrupted`] rather
//! than silently producing a worse mess.

use crate::error::TreeError;

use super::arena::Arena;
use super::links::{link_bottom, link_right};
use super::node::{Links, NodeId, Side};

impl<T> Arena<T> {
    /// Detach `id` from its parent/sibling slot, promoting its children (if
    /// any) into the vacated position in order. Afterward `id` is fully
    /// isolated: its former children now belong to whichever ex-sibling
    /// inherited the slot, not to `id` itself.
    pub fn pop(&mut self, id: NodeId) -> Result<(), TreeError> {
        let links = self.links(id);
        if links.is_flipped_t() {
            tracing::debug!(?id, "pop: flipped T detected");
            return Err(TreeError::corrupted("flipped T").with_cause(id));
        }
        tracing::trace!(?id, "pop");

        let head = self.child(id);
        let tail = head.map(|h| self.tail(h));

        match head {
            Some(head) => {
                self.splice_incoming(links, Some(head));
                link_right(self, tail.unwrap(), links.right);
            }
            None => self.splice_incoming(links, links.right),
        }

        self.set_neighbor(id, Side::Top, None);
        self.set_neighbor(id, Side::Left, None);
        self.set_neighbor(id, Side::Right, None);
        self.set_neighbor(id, Side::Bottom, None);
        Ok(())
    }

    /// Detach `id`, together with its entire subtree, from its parent/
    /// sibling slot. The subtree remains intact and reachable via `id`
    /// itself, just no longer linked into the surrounding structure.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        let links = self.links(id);
        if links.is_flipped_t() {
            tracing::debug!(?id, "remove: flipped T detected");
            return Err(TreeError::corrupted("flipped T").with_cause(id));
        }
        tracing::trace!(?id, "remove");

        self.splice_incoming(links, links.right);

        self.set_neighbor(id, Side::Top, None);
        self.set_neighbor(id, Side::Left, None);
        self.set_neighbor(id, Side::Right, None);
        Ok(())
    }

    /// Detach `id`'s children only: `id` itself stays exactly where it was
    /// among its own parent/siblings. Afterward `id` has no children; the
    /// former child subtree stands alone, rooted at the detached first
    /// child, which now has neither `top` nor `left`.
    pub fn clear(&mut self, id: NodeId) -> Result<(), TreeError> {
        if self.links(id).is_flipped_t() {
            tracing::debug!(?id, "clear: flipped T detected");
            return Err(TreeError::corrupted("flipped T").with_cause(id));
        }
        tracing::trace!(?id, "clear");
        link_bottom(self, id, None);
        Ok(())
    }

    /// Link whatever occupied `id`'s incoming slot (`top` or `left`) to
    /// `replacement` instead, restoring reciprocity on that side.
    ///
    /// `replacement` (id's old child or old right sibling) carries a stale
    /// incoming pointer of its own — back to `id` — that the chosen branch
    /// below won't touch (each only rewires one axis). Clear both of
    /// `replacement`'s incoming links first so it never ends up with two
    /// set at once.
    ///
    /// Shared with `tree::offer`, which performs the same kind of
    /// slot-takeover when an incoming range becomes a new parent.
    pub(crate) fn splice_incoming(&mut self, links: Links, replacement: Option<NodeId>) {
        if let Some(replacement) = replacement {
            self.set_neighbor(replacement, Side::Top, None);
            self.set_neighbor(replacement, Side::Left, None);
        }
        if let Some(parent) = links.top {
            link_bottom(self, parent, replacement);
        } else if let Some(prev) = links.left {
            link_right(self, prev, replacement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SyntaxRange;
    use crate::tree::links::{link_bottom, link_right, link_top};

    fn leaf(arena: &mut Arena<&'static str>, value: &'static str, offset: u32) -> NodeId {
        arena.insert(value, SyntaxRange::new(offset, 1, 0))
    }

    #[test]
    fn pop_promotes_children_into_vacated_slot() {
        // root -> [mid, z]; mid -> [a, b]
        let mut arena: Arena<&'static str> = Arena::new();
        let root = leaf(&mut arena, "root", 0);
        let mid = leaf(&mut arena, "mid", 1);
        let z = leaf(&mut arena, "z", 2);
        let a = leaf(&mut arena, "a", 3);
        let b = leaf(&mut arena, "b", 4);

        link_bottom(&mut arena, root, Some(mid));
        link_right(&mut arena, mid, Some(z));
        link_bottom(&mut arena, mid, Some(a));
        link_right(&mut arena, a, Some(b));

        arena.pop(mid).unwrap();

        // a, b now occupy mid's old slot under root, followed by z.
        let kids: Vec<_> = arena.children(root).collect();
        assert_eq!(kids, vec![a, b, z]);
        assert_eq!(arena.parent(a), Some(root));
        assert!(arena.links(mid).is_isolated());
    }

    #[test]
    fn pop_with_no_children_splices_siblings_together() {
        let mut arena: Arena<&'static str> = Arena::new();
        let root = leaf(&mut arena, "root", 0);
        let a = leaf(&mut arena, "a", 1);
        let b = leaf(&mut arena, "b", 2);
        let c = leaf(&mut arena, "c", 3);

        link_bottom(&mut arena, root, Some(a));
        link_right(&mut arena, a, Some(b));
        link_right(&mut arena, b, Some(c));

        arena.pop(b).unwrap();

        assert_eq!(arena.children(root).collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(arena.next(a), Some(c));
        assert_eq!(arena.previous(c), Some(a));
    }

    #[test]
    fn remove_detaches_whole_subtree() {
        let mut arena: Arena<&'static str> = Arena::new();
        let root = leaf(&mut arena, "root", 0);
        let mid = leaf(&mut arena, "mid", 1);
        let a = leaf(&mut arena, "a", 2);

        link_bottom(&mut arena, root, Some(mid));
        link_bottom(&mut arena, mid, Some(a));

        arena.remove(mid).unwrap();

        assert_eq!(arena.children(root).collect::<Vec<_>>(), Vec::<NodeId>::new());
        // subtree survives, reachable via `mid` itself
        assert_eq!(arena.child(mid), Some(a));
        assert_eq!(arena.parent(mid), None);
    }

    #[test]
    fn clear_detaches_children_but_leaves_node_in_place() {
        let mut arena: Arena<&'static str> = Arena::new();
        let root = leaf(&mut arena, "root", 0);
        let mid = leaf(&mut arena, "mid", 1);
        let a = leaf(&mut arena, "a", 2);
        let b = leaf(&mut arena, "b", 3);

        link_bottom(&mut arena, root, Some(mid));
        link_bottom(&mut arena, mid, Some(a));
        link_right(&mut arena, a, Some(b));

        arena.clear(mid).unwrap();

        // `mid` stays exactly where it was under `root`.
        assert_eq!(arena.parent(mid), Some(root));
        assert_eq!(arena.child(mid), None);
        // the former child subtree stands alone, rooted at `a`.
        assert_eq!(arena.links(a).top, None);
        assert_eq!(arena.links(a).left, None);
        assert_eq!(arena.next(a), Some(b));
    }

    #[test]
    fn pop_detects_flipped_t() {
        let mut arena: Arena<&'static str> = Arena::new();
        let x = leaf(&mut arena, "x", 0);
        let top = leaf(&mut arena, "top", 1);
        let left = leaf(&mut arena, "left", 2);
        link_top(&mut arena, x, Some(top));
        arena.get_mut(x).links.left = Some(left); // force invalid state directly
        assert!(arena.pop(x).is_err());
    }
}
