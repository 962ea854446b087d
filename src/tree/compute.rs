//! `compute`: the non-mutating dry-run twin of [`super::offer::offer`].
//! Runs the identical six-case dispatch against `arena`, but instead of
//! writing any neighbor field, it accumulates the neighbor assignments an
//! equivalent `offer` call would make around the incoming range, and
//! returns them as a [`Fantom`] — or the same error `offer` would have
//! returned, with nothing touched either way.

use indexmap::IndexMap;

use crate::algebra::{Precedence, Relation};
use crate::base::SyntaxRange;
use crate::error::TreeError;

use super::arena::Arena;
use super::node::{NodeId, Side};
use super::offer::relation_between;

/// The neighbor assignments a hypothetical insertion would produce,
/// keyed by which of the incoming range's own four sides each target
/// would occupy. Never constructed by mutating anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fantom {
    links: IndexMap<Side, NodeId>,
}

impl Fantom {
    fn new() -> Self {
        Self { links: IndexMap::new() }
    }

    fn with(mut self, side: Side, node: NodeId) -> Self {
        self.links.insert(side, node);
        self
    }

    /// What would occupy `side` of the incoming range, if anything.
    pub fn get(&self, side: Side) -> Option<NodeId> {
        self.links.get(&side).copied()
    }

    /// All would-be neighbor assignments, in the order they were
    /// resolved.
    pub fn sides(&self) -> impl Iterator<Item = (Side, NodeId)> + '_ {
        self.links.iter().map(|(side, node)| (*side, *node))
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<T> Arena<T> {
    /// Method-style entry point for [`compute`]: preview where `incoming`
    /// would land relative to the structure reachable from `cursor`,
    /// without mutating anything.
    pub fn compute(&self, cursor: NodeId, incoming: SyntaxRange) -> Result<Fantom, TreeError> {
        compute(self, cursor, incoming)
    }
}

/// Dry-run twin of [`super::offer::offer`]: classify `incoming` against
/// the structure reachable from `cursor` and report what `offer` would
/// do, without allocating or linking anything.
pub fn compute<T>(arena: &Arena<T>, cursor: NodeId, incoming: SyntaxRange) -> Result<Fantom, TreeError> {
    let relation = relation_between(arena.range(cursor), incoming);
    tracing::debug!(?cursor, ?incoming, ?relation, "compute dispatch");
    match relation {
        Relation::Self_ => compute_self(arena, cursor, incoming),
        Relation::Parent => compute_parent(arena, cursor, incoming),
        Relation::Child => compute_child(arena, cursor, incoming),
        Relation::Clash => Err(TreeError::clash(cursor)),
        Relation::Next => compute_next(arena, cursor, incoming),
        Relation::Previous => compute_previous(arena, cursor, incoming),
    }
}

fn compute_self<T>(arena: &Arena<T>, cursor: NodeId, incoming: SyntaxRange) -> Result<Fantom, TreeError> {
    match Precedence::compute(arena.get(cursor).weight(), incoming.weight) {
        Precedence::Equal => Err(TreeError::takeover(cursor)),
        Precedence::Lower => match arena.child(cursor) {
            Some(old_child) if arena.range(old_child).range == arena.range(cursor).range => {
                compute_self(arena, old_child, incoming)
            }
            old_child => {
                let mut fantom = Fantom::new().with(Side::Top, cursor);
                if let Some(old_child) = old_child {
                    fantom = fantom.with(Side::Bottom, old_child);
                }
                Ok(fantom)
            }
        },
        Precedence::Higher => {
            let links = arena.links(cursor);
            let mut fantom = Fantom::new().with(Side::Bottom, cursor);
            if let Some(top) = links.top {
                fantom = fantom.with(Side::Top, top);
            }
            if let Some(left) = links.left {
                fantom = fantom.with(Side::Left, left);
            }
            if let Some(right) = links.right {
                fantom = fantom.with(Side::Right, right);
            }
            Ok(fantom)
        }
    }
}

fn compute_child<T>(arena: &Arena<T>, cursor: NodeId, incoming: SyntaxRange) -> Result<Fantom, TreeError> {
    match arena.child(cursor) {
        Some(child) => compute(arena, child, incoming),
        None => Ok(Fantom::new().with(Side::Top, cursor)),
    }
}

fn compute_parent<T>(arena: &Arena<T>, cursor: NodeId, incoming: SyntaxRange) -> Result<Fantom, TreeError> {
    let mut level = cursor;
    loop {
        match arena.parent(level) {
            None => break,
            Some(parent) => match relation_between(arena.range(parent), incoming) {
                Relation::Parent => level = parent,
                Relation::Self_ => return compute_self(arena, parent, incoming),
                Relation::Child => break,
                Relation::Clash => return Err(TreeError::clash(parent)),
                Relation::Next | Relation::Previous => {
                    return Err(TreeError::corrupted("compute_parent: ancestor neither contains nor fits inside incoming").with_cause(parent));
                }
            },
        }
    }

    let mut left_most = level;
    while let Some(prev) = arena.previous(left_most) {
        match relation_between(arena.range(prev), incoming) {
            Relation::Parent | Relation::Self_ => left_most = prev,
            Relation::Clash => return Err(TreeError::clash(prev)),
            _ => break,
        }
    }

    let mut right_most = level;
    while let Some(next) = arena.next(right_most) {
        match relation_between(arena.range(next), incoming) {
            Relation::Parent | Relation::Self_ => right_most = next,
            Relation::Clash => return Err(TreeError::clash(next)),
            _ => break,
        }
    }

    let left_links = arena.links(left_most);
    let mut fantom = Fantom::new().with(Side::Bottom, left_most);
    if let Some(top) = left_links.top {
        fantom = fantom.with(Side::Top, top);
    }
    if let Some(left) = left_links.left {
        fantom = fantom.with(Side::Left, left);
    }
    if let Some(right) = arena.links(right_most).right {
        fantom = fantom.with(Side::Right, right);
    }
    Ok(fantom)
}

/// Mirrors `offer_next`'s guard against bouncing forever with
/// `compute_previous`: if `incoming` also lies entirely before `next`, it
/// belongs in the gap between `cursor` and `next`, so report that directly
/// instead of recursing into `next`.
fn compute_next<T>(arena: &Arena<T>, cursor: NodeId, incoming: SyntaxRange) -> Result<Fantom, TreeError> {
    match arena.next(cursor) {
        Some(next) => match relation_between(arena.range(next), incoming) {
            Relation::Previous => Ok(Fantom::new().with(Side::Left, cursor).with(Side::Right, next)),
            _ => compute(arena, next, incoming),
        },
        None => match arena.parent(cursor) {
            None => Ok(Fantom::new().with(Side::Left, cursor)),
            Some(parent) => match relation_between(arena.range(parent), incoming) {
                Relation::Child => Ok(Fantom::new().with(Side::Left, cursor)),
                Relation::Clash => Err(TreeError::clash(parent)),
                _ => compute_next(arena, parent, incoming),
            },
        },
    }
}

/// Symmetric to `compute_next`'s guard.
fn compute_previous<T>(arena: &Arena<T>, cursor: NodeId, incoming: SyntaxRange) -> Result<Fantom, TreeError> {
    match arena.previous(cursor) {
        Some(prev) => match relation_between(arena.range(prev), incoming) {
            Relation::Next => Ok(Fantom::new().with(Side::Left, prev).with(Side::Right, cursor)),
            _ => compute(arena, prev, incoming),
        },
        None => match arena.links(cursor).top {
            None => Ok(Fantom::new().with(Side::Right, cursor)),
            Some(parent) => match relation_between(arena.range(parent), incoming) {
                Relation::Child => {
                    Ok(Fantom::new().with(Side::Right, cursor).with(Side::Top, parent))
                }
                Relation::Clash => Err(TreeError::clash(parent)),
                _ => compute_previous(arena, parent, incoming),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::offer::offer;

    fn insert(arena: &mut Arena<&'static str>, value: &'static str, offset: u32, length: u32, weight: i64) -> NodeId {
        arena.insert(value, SyntaxRange::new(offset, length, weight))
    }

    #[test]
    fn compute_matches_offer_without_mutating() {
        let mut arena: Arena<&'static str> = Arena::new();
        let root = insert(&mut arena, "root", 0, 10, 0);
        let mid = insert(&mut arena, "mid", 4, 2, 0);
        offer(&mut arena, root, mid).unwrap();

        let incoming_range = SyntaxRange::new(7, 1, 0);
        let before = arena.links(root);

        let fantom = compute(&arena, mid, incoming_range).unwrap();
        assert_eq!(fantom.get(Side::Left), Some(mid));
        assert_eq!(arena.links(root), before, "compute must not mutate");
    }

    #[test]
    fn compute_reports_clash_without_mutating() {
        let mut arena: Arena<&'static str> = Arena::new();
        let root = insert(&mut arena, "root", 0, 10, 0);
        let a = insert(&mut arena, "a", 0, 4, 0);
        offer(&mut arena, root, a).unwrap();

        let clashing = SyntaxRange::new(2, 4, 0);
        let err = compute(&arena, a, clashing).unwrap_err();
        assert!(matches!(err, TreeError::Clash { .. }));
    }

    #[test]
    fn compute_self_equal_weight_is_takeover() {
        let mut arena: Arena<&'static str> = Arena::new();
        let root = insert(&mut arena, "root", 0, 5, 0);
        let err = compute(&arena, root, SyntaxRange::new(0, 5, 0)).unwrap_err();
        assert!(matches!(err, TreeError::Takeover { .. }));
    }

    #[test]
    fn compute_into_gap_between_two_adjacent_siblings_does_not_loop() {
        // Mirrors `offer`'s gap-splice fix: previewing an insertion into
        // the gap between two adjacent siblings used to bounce
        // `compute_next`/`compute_previous` forever before returning.
        let mut arena: Arena<&'static str> = Arena::new();
        let root = insert(&mut arena, "root", 0, 10, 0);
        let before = insert(&mut arena, "before", 1, 1, 0);
        let mid = insert(&mut arena, "mid", 4, 2, 0);
        offer(&mut arena, root, before).unwrap();
        offer(&mut arena, root, mid).unwrap();

        let fantom = compute(&arena, before, SyntaxRange::new(2, 1, 0)).unwrap();
        assert_eq!(fantom.get(Side::Left), Some(before));
        assert_eq!(fantom.get(Side::Right), Some(mid));
    }

    #[test]
    fn compute_parent_run_expansion_rejects_clash_instead_of_overlapping() {
        let mut arena: Arena<&'static str> = Arena::new();
        let parent = insert(&mut arena, "parent", 0, 12, 0);
        let cursor = insert(&mut arena, "cursor", 4, 2, 0);
        let y = insert(&mut arena, "y", 7, 3, 0);
        offer(&mut arena, parent, cursor).unwrap();
        offer(&mut arena, cursor, y).unwrap();

        let err = compute(&arena, cursor, SyntaxRange::new(3, 5, 0)).unwrap_err();
        assert!(matches!(err, TreeError::Clash { .. }));
    }
}
