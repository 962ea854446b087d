//! Link primitives: the only code in this crate that ever writes a
//! neighbor field. Each of the four directional mutators establishes "`Y`
//! is on side `S` of `X`" while tearing down whatever previously occupied
//! both ends, keeping reciprocity (`A.top==B ⇔ B.bottom==A`, and the
//! `left`/`right` analogue) automatic.
//!
//! Contract, stated for `link_bottom` (the others are the same shape on
//! their axis): before the call `X.bottom` may be some `B0` and `Y.top`
//! may be some `T0`; after the call `X.bottom==Y`, `Y.top==X`,
//! `B0.top==None`, `T0.bottom==None`. If `Y` is `None`, only `X.bottom` is
//! cleared (and its former occupant's back-pointer unlinked).

use super::arena::Arena;
use super::node::{NodeId, Side};

/// Set `x`'s neighbor on `side` to `y`, maintaining reciprocity by
/// clearing whatever previously sat on either end. This is the single
/// primitive all four directional mutators reduce to: `side` and its
/// [`Side::reciprocal`] determine which axis and direction is being
/// rewired.
pub(crate) fn link<T>(arena: &mut Arena<T>, x: NodeId, side: Side, y: Option<NodeId>) {
    let reciprocal = side.reciprocal();

    if let Some(displaced) = arena.neighbor(x, side) {
        arena.set_neighbor(displaced, reciprocal, None);
    }

    match y {
        Some(y) => {
            if let Some(displaced) = arena.neighbor(y, reciprocal) {
                arena.set_neighbor(displaced, side, None);
            }
            arena.set_neighbor(x, side, Some(y));
            arena.set_neighbor(y, reciprocal, Some(x));
        }
        None => arena.set_neighbor(x, side, None),
    }
}

/// `x.bottom = y` (and `y.top = x`).
pub(crate) fn link_bottom<T>(arena: &mut Arena<T>, x: NodeId, y: Option<NodeId>) {
    link(arena, x, Side::Bottom, y);
}

/// `x.top = y` (and `y.bottom = x`).
pub(crate) fn link_top<T>(arena: &mut Arena<T>, x: NodeId, y: Option<NodeId>) {
    link(arena, x, Side::Top, y);
}

/// `x.left = y` (and `y.right = x`).
pub(crate) fn link_left<T>(arena: &mut Arena<T>, x: NodeId, y: Option<NodeId>) {
    link(arena, x, Side::Left, y);
}

/// `x.right = y` (and `y.left = x`).
pub(crate) fn link_right<T>(arena: &mut Arena<T>, x: NodeId, y: Option<NodeId>) {
    link(arena, x, Side::Right, y);
}
