//! Derived, read-only accessors computed by walking neighbor links. None of
//! these mutate the arena.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::error::TreeError;

use super::arena::Arena;
use super::node::{NodeId, Side};

impl<T> Arena<T> {
    /// `left`.
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(id, Side::Left)
    }

    /// `right`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(id, Side::Right)
    }

    /// `bottom`: the first child, if any.
    pub fn child(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(id, Side::Bottom)
    }

    /// Walk `left` to the leftmost sibling.
    pub fn head(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.previous(current) {
            current = left;
        }
        current
    }

    /// Walk `right` to the rightmost sibling.
    pub fn tail(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(right) = self.next(current) {
            current = right;
        }
        current
    }

    /// The parent, reached via the leftmost sibling's `top`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(self.head(id), Side::Top)
    }

    /// Walk `parent` until there is none left.
    pub fn root(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// The lazy sibling chain starting at the first child:
    /// `bottom, bottom.right, bottom.right.right, …`.
    pub fn children(&self, id: NodeId) -> Children<'_, T> {
        Children {
            arena: self,
            next: self.child(id),
        }
    }

    /// Depth-first, pre-order traversal over descendants (not inclusive of
    /// `id` itself).
    pub fn hierarchy(&self, id: NodeId) -> Hierarchy<'_, T> {
        Hierarchy {
            arena: self,
            stack: self.children(id).collect::<Vec<_>>().into_iter().rev().collect(),
        }
    }

    /// The `indices[k]`th child at depth `k`, following `indices` from
    /// `id`. Errors ([`TreeError::Illegal`]) on an empty path or a missing
    /// index — the "exception" indexed-access variant.
    pub fn path(&self, id: NodeId, indices: &[usize]) -> Result<NodeId, TreeError> {
        if indices.is_empty() {
            return Err(TreeError::illegal("empty index path"));
        }
        let mut current = id;
        for &i in indices {
            current = self
                .children(current)
                .nth(i)
                .ok_or_else(|| TreeError::illegal(format!("no child at index {i}")))?;
        }
        Ok(current)
    }

    /// As [`Self::path`], but a missing index (or empty path) yields
    /// `None` instead of an error — the "null" indexed-access variant.
    pub fn try_path(&self, id: NodeId, indices: &[usize]) -> Option<NodeId> {
        let mut current = id;
        if indices.is_empty() {
            return None;
        }
        for &i in indices {
            current = self.children(current).nth(i)?;
        }
        Some(current)
    }

    /// As [`Self::path`], but a missing index (or empty path) falls back
    /// to `default` — the "default" indexed-access variant.
    pub fn path_or(&self, id: NodeId, indices: &[usize], default: NodeId) -> NodeId {
        self.try_path(id, indices).unwrap_or(default)
    }

    /// Generic lazy traversal, documented in `spec.md` §4.3/§9: an
    /// explicit queue plus a back-stack of "just visited" nodes, so
    /// `expand` need not manually exclude the neighbor it arrived from.
    /// `expand` returns, for a given node, the neighbors to follow next
    /// (e.g. `|arena, n| vec![arena.next(n), arena.previous(n)].into_iter().flatten().collect()`).
    ///
    /// This is the back-stack variant, which (per the documented Open
    /// Question) only suppresses the *single* most recent neighbor and can
    /// revisit a node through two distinct edges in a zig-zag hierarchy.
    /// Use it only with acyclic `expand` functions (e.g. following a single
    /// structural direction); for anything that might revisit, use
    /// [`Self::collect_unique`].
    pub fn collect<F>(&self, start: NodeId, inclusive: bool, expand: F) -> Collect<'_, T, F>
    where
        F: Fn(&Arena<T>, NodeId) -> Vec<NodeId>,
    {
        let mut queue = VecDeque::new();
        if inclusive {
            queue.push_back(Some(start));
        } else {
            for n in expand(self, start) {
                queue.push_back(Some(n));
            }
            queue.push_back(None);
        }
        Collect {
            arena: self,
            queue,
            back_stack: if inclusive { Vec::new() } else { vec![start] },
            expand,
            visited: None,
        }
    }

    /// As [`Self::collect`], but tracks a full visited set so no node is
    /// ever yielded twice, at the cost of giving up the documented
    /// back-stack traversal order's exact shape for cyclic `expand`
    /// functions.
    pub fn collect_unique<F>(&self, start: NodeId, inclusive: bool, expand: F) -> Collect<'_, T, F>
    where
        F: Fn(&Arena<T>, NodeId) -> Vec<NodeId>,
    {
        let mut it = self.collect(start, inclusive, expand);
        it.visited = Some(FxHashSet::default());
        it
    }
}

/// Iterator over a node's children, left to right.
pub struct Children<'a, T> {
    arena: &'a Arena<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena.next(current);
        Some(current)
    }
}

/// Depth-first, pre-order iterator over a node's descendants.
pub struct Hierarchy<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for Hierarchy<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        for child in self.arena.children(current).collect::<Vec<_>>().into_iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}

/// Iterator produced by [`Arena::collect`] / [`Arena::collect_unique`].
pub struct Collect<'a, T, F> {
    arena: &'a Arena<T>,
    queue: VecDeque<Option<NodeId>>,
    back_stack: Vec<NodeId>,
    expand: F,
    visited: Option<FxHashSet<NodeId>>,
}

impl<'a, T, F> Iterator for Collect<'a, T, F>
where
    F: Fn(&Arena<T>, NodeId) -> Vec<NodeId>,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            match self.queue.pop_front()? {
                None => {
                    self.back_stack.pop();
                }
                Some(node) => {
                    if let Some(visited) = &mut self.visited {
                        if !visited.insert(node) {
                            continue;
                        }
                    }
                    let came_from = self.back_stack.last().copied();
                    let neighbors = (self.expand)(self.arena, node);
                    self.back_stack.push(node);
                    for n in neighbors {
                        if Some(n) != came_from {
                            self.queue.push_back(Some(n));
                        }
                    }
                    self.queue.push_back(None);
                    return Some(node);
                }
            }
        }
    }
}
