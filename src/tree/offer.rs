//! `offer`: insert a fresh, already-allocated node into the structure
//! reachable from `cursor`, by repeatedly classifying the incoming range
//! against the node currently under the cursor and either resolving the
//! insertion or moving the cursor and recursing.
//!
//! The six cases are [`Relation`]'s six variants: `Self_` and `Parent` and
//! `Child` resolve immediately (`offer_self`/`offer_parent`/`offer_child`);
//! `Clash` rejects outright; `Next`/`Previous` walk the cursor across a
//! sibling and recurse. A mutation only ever happens in a case's own base
//! branch, never before a recursive call returns — so a rejection anywhere
//! down the chain unwinds via `?` before anything has been written, with
//! no explicit rollback needed.

use crate::algebra::{Precedence, Relation};
use crate::base::SyntaxRange;
use crate::error::TreeError;

use super::arena::Arena;
use super::compute::compute;
use super::links::{link_bottom, link_right};
use super::node::{Links, NodeId, Side};

/// The relation of `incoming` to `existing`'s range: `Self_` means
/// identical bounds, `Parent` means `incoming` contains `existing`,
/// `Child` the reverse, `Next`/`Previous` disjoint ordering, `Clash`
/// overlap without containment.
///
/// `existing` is passed as `Relation::compute`'s first interval: its
/// `Container`/`Fragment` variants (second contains first / first
/// contains second) are exactly backwards from this function's own
/// "incoming relative to existing" framing, so the argument order here
/// is what makes `Container -> Parent` read as "incoming is parent".
pub(crate) fn relation_between(existing: SyntaxRange, incoming: SyntaxRange) -> Relation {
    Relation::compute(
        existing.offset(),
        existing.terminal(),
        incoming.offset(),
        incoming.terminal(),
    )
}

fn relation_to<T>(arena: &Arena<T>, existing: NodeId, incoming: NodeId) -> Relation {
    relation_between(arena.range(existing), arena.range(incoming))
}

impl<T> Arena<T> {
    /// Method-style entry point for [`offer`]: insert `incoming` into the
    /// structure reachable from `cursor`, `incoming.pop()`-ing it first if
    /// it was already linked elsewhere.
    ///
    /// Pre-flights the placement with [`compute`] before touching
    /// anything: `compute` walks the identical case analysis `offer`
    /// would, so any `TreeClash`/`TreeTakeover`/corruption it would hit is
    /// surfaced here, before `incoming` is popped from wherever it
    /// currently lives. Per the atomicity contract (`spec.md` §4.5), a
    /// failing `offer` must leave both the source structure `incoming` was
    /// popped from and the destination structure untouched — popping
    /// unconditionally first and only then discovering a clash would
    /// strand `incoming` detached from its old home even on failure.
    pub fn offer(&mut self, cursor: NodeId, incoming: NodeId) -> Result<(), TreeError> {
        compute(self, cursor, self.range(incoming)).inspect_err(
            |error| tracing::debug!(?cursor, ?incoming, %error, "offer rejected by pre-flight compute"),
        )?;
        if !self.links(incoming).is_isolated() {
            self.pop(incoming)?;
        }
        offer(self, cursor, incoming)
    }
}

/// Insert `incoming` (a node already allocated in `arena`, not yet linked)
/// into the structure reachable from `cursor`.
pub fn offer<T>(arena: &mut Arena<T>, cursor: NodeId, incoming: NodeId) -> Result<(), TreeError> {
    let relation = relation_to(arena, cursor, incoming);
    tracing::trace!(?cursor, ?incoming, ?relation, "offer dispatch");
    match relation {
        Relation::Self_ => offer_self(arena, cursor, incoming),
        Relation::Parent => offer_parent(arena, cursor, incoming),
        Relation::Child => offer_child(arena, cursor, incoming),
        Relation::Clash => Err(TreeError::clash(cursor)),
        Relation::Next => offer_next(arena, cursor, incoming),
        Relation::Previous => offer_previous(arena, cursor, incoming),
    }
}

/// `incoming`'s range coincides exactly with `cursor`'s. `Precedence`
/// breaks the tie: whichever weight is higher nests outside the other.
fn offer_self<T>(arena: &mut Arena<T>, cursor: NodeId, incoming: NodeId) -> Result<(), TreeError> {
    match Precedence::compute(arena.get(cursor).weight(), arena.get(incoming).weight()) {
        Precedence::Equal => Err(TreeError::takeover(cursor)),
        // incoming is higher-weighted: it slots directly under cursor,
        // adopting cursor's existing children as its own — unless the
        // current child coincides with cursor's own range too, in which
        // case that child gets first say over where incoming actually
        // nests (it may belong deeper than immediately under cursor).
        Precedence::Lower => match arena.child(cursor) {
            Some(old_child) if arena.range(old_child).range == arena.range(cursor).range => {
                offer_self(arena, old_child, incoming)
            }
            old_child => {
                link_bottom(arena, incoming, old_child);
                link_bottom(arena, cursor, Some(incoming));
                Ok(())
            }
        },
        // incoming is lower-weighted: it becomes cursor's new parent,
        // taking over cursor's old slot among cursor's former siblings.
        Precedence::Higher => {
            let cursor_links = arena.links(cursor);
            arena.set_neighbor(cursor, Side::Top, None);
            arena.set_neighbor(cursor, Side::Left, None);
            arena.set_neighbor(cursor, Side::Right, None);
            arena.splice_incoming(cursor_links, Some(incoming));
            link_right(arena, incoming, cursor_links.right);
            link_bottom(arena, incoming, Some(cursor));
            Ok(())
        }
    }
}

/// `cursor` contains `incoming`: descend into `cursor`'s children, or
/// become its first child if it has none.
fn offer_child<T>(arena: &mut Arena<T>, cursor: NodeId, incoming: NodeId) -> Result<(), TreeError> {
    match arena.child(cursor) {
        Some(child) => offer(arena, child, incoming),
        None => {
            link_bottom(arena, cursor, Some(incoming));
            Ok(())
        }
    }
}

/// `incoming` contains `cursor`. `cursor`'s own generation may not be the
/// widest one `incoming` swallows: climb through parents first, as long as
/// each one is itself still entirely inside `incoming`, then extend outward
/// across whichever generation that climb settles on while its siblings
/// too fall inside `incoming`, and take over the captured run's slot among
/// its former neighbors, adopting the run as `incoming`'s children.
fn offer_parent<T>(arena: &mut Arena<T>, cursor: NodeId, incoming: NodeId) -> Result<(), TreeError> {
    let incoming_range = arena.range(incoming);

    let mut level = cursor;
    loop {
        match arena.parent(level) {
            None => break,
            Some(parent) => match relation_between(arena.range(parent), incoming_range) {
                Relation::Parent => level = parent,
                Relation::Self_ => return offer_self(arena, parent, incoming),
                Relation::Child => break,
                Relation::Clash => return Err(TreeError::clash(parent)),
                Relation::Next | Relation::Previous => {
                    return Err(TreeError::corrupted("offer_parent: ancestor neither contains nor fits inside incoming").with_cause(parent));
                }
            },
        }
    }

    let mut left_most = level;
    while let Some(prev) = arena.previous(left_most) {
        match relation_between(arena.range(prev), incoming_range) {
            Relation::Parent | Relation::Self_ => left_most = prev,
            Relation::Clash => return Err(TreeError::clash(prev)),
            _ => break,
        }
    }

    let mut right_most = level;
    while let Some(next) = arena.next(right_most) {
        match relation_between(arena.range(next), incoming_range) {
            Relation::Parent | Relation::Self_ => right_most = next,
            Relation::Clash => return Err(TreeError::clash(next)),
            _ => break,
        }
    }

    let outer = Links {
        top: arena.links(left_most).top,
        left: arena.links(left_most).left,
        right: arena.links(right_most).right,
        bottom: None,
    };

    arena.set_neighbor(left_most, Side::Top, None);
    arena.set_neighbor(left_most, Side::Left, None);
    arena.set_neighbor(right_most, Side::Right, None);

    arena.splice_incoming(outer, Some(incoming));
    link_right(arena, incoming, outer.right);
    link_bottom(arena, incoming, Some(left_most));
    Ok(())
}

/// `incoming` lies entirely after `cursor`: move past `cursor` and
/// recurse, or (at the tail) append as the new last sibling if it still
/// fits inside the parent's range, else delegate to the parent's own
/// `Next` handling so the generation above gets a chance to place it.
///
/// Before recursing past `next`, check `incoming` against it: if `incoming`
/// lies entirely before `next` too, it belongs in the gap between `cursor`
/// and `next`, not past `next` — recursing anyway would have `next` bounce
/// it straight back here via `offer_previous`, looping forever.
fn offer_next<T>(arena: &mut Arena<T>, cursor: NodeId, incoming: NodeId) -> Result<(), TreeError> {
    match arena.next(cursor) {
        Some(next) => match relation_to(arena, next, incoming) {
            Relation::Previous => {
                link_right(arena, cursor, Some(incoming));
                link_right(arena, incoming, Some(next));
                Ok(())
            }
            _ => offer(arena, next, incoming),
        },
        None => match arena.parent(cursor) {
            None => {
                link_right(arena, cursor, Some(incoming));
                Ok(())
            }
            Some(parent) => match relation_to(arena, parent, incoming) {
                Relation::Child => {
                    link_right(arena, cursor, Some(incoming));
                    Ok(())
                }
                Relation::Clash => Err(TreeError::clash(parent)),
                _ => offer_next(arena, parent, incoming),
            },
        },
    }
}

/// `incoming` lies entirely before `cursor`: move before `cursor` and
/// recurse, or (at the head) prepend as the new first sibling if it still
/// fits inside the parent's range, else delegate to the parent's own
/// `Previous` handling.
///
/// Symmetric to `offer_next`'s guard: if `incoming` lies entirely after
/// `prev` too, it belongs between `prev` and `cursor`, not before `prev` —
/// recurse any further and `prev` would bounce it straight back via
/// `offer_next`.
fn offer_previous<T>(arena: &mut Arena<T>, cursor: NodeId, incoming: NodeId) -> Result<(), TreeError> {
    match arena.previous(cursor) {
        Some(prev) => match relation_to(arena, prev, incoming) {
            Relation::Next => {
                link_right(arena, prev, Some(incoming));
                link_right(arena, incoming, Some(cursor));
                Ok(())
            }
            _ => offer(arena, prev, incoming),
        },
        None => match arena.links(cursor).top {
            None => {
                link_right(arena, incoming, Some(cursor));
                Ok(())
            }
            Some(parent) => match relation_to(arena, parent, incoming) {
                Relation::Child => {
                    link_bottom(arena, parent, Some(incoming));
                    link_right(arena, incoming, Some(cursor));
                    Ok(())
                }
                Relation::Clash => Err(TreeError::clash(parent)),
                _ => offer_previous(arena, parent, incoming),
            },
        },
    }
}
