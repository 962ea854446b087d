//! Node-level wrappers over the range algebra: the same
//! `Intersection`/`Dominance`/`Relation`/`Precedence` free functions,
//! applied to two nodes already living in an [`Arena`] rather than raw
//! endpoints or [`Range`](crate::base::Range)s directly.

use crate::algebra::{Dominance, Intersection, Precedence, Relation};

use super::arena::Arena;
use super::node::NodeId;

impl<T> Arena<T> {
    /// Classify `a`'s range against `b`'s.
    pub fn intersection(&self, a: NodeId, b: NodeId) -> Intersection {
        Intersection::of_ranges(self.range(a).range, self.range(b).range)
    }

    /// The direction-erased containment category between `a` and `b`.
    pub fn dominance(&self, a: NodeId, b: NodeId) -> Dominance {
        Dominance::of_ranges(self.range(a).range, self.range(b).range)
    }

    /// The oriented structural relation of `b` to `a`.
    pub fn relation(&self, a: NodeId, b: NodeId) -> Relation {
        Relation::of_ranges(self.range(a).range, self.range(b).range)
    }

    /// Compare `a` and `b`'s weights, for nodes whose ranges already
    /// coincide exactly.
    pub fn precedence(&self, a: NodeId, b: NodeId) -> Precedence {
        Precedence::of_syntax_ranges(self.range(a), self.range(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SyntaxRange;

    #[test]
    fn node_level_algebra_matches_range_level() {
        let mut arena: Arena<&'static str> = Arena::new();
        let a = arena.insert("a", SyntaxRange::new(0, 10, 0));
        let b = arena.insert("b", SyntaxRange::new(2, 2, 0));

        assert_eq!(arena.intersection(a, b), Intersection::of_ranges(arena.range(a).range, arena.range(b).range));
        assert_eq!(arena.dominance(a, b), Dominance::Contain);
        assert_eq!(arena.relation(a, b), Relation::Parent);
    }

    #[test]
    fn precedence_compares_weights() {
        let mut arena: Arena<&'static str> = Arena::new();
        let a = arena.insert("a", SyntaxRange::new(0, 4, 2));
        let b = arena.insert("b", SyntaxRange::new(0, 4, 5));
        assert_eq!(arena.precedence(a, b), Precedence::Lower);
    }
}
