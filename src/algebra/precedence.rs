//! [`Precedence`]: the ordering of two weights, used to break ties between
//! nodes whose ranges coincide exactly.

use crate::base::{SyntaxRange, Weight};

/// Ordering of a weight `k` against a weight `w`. Purely numeric; callers
/// (see `tree::offer::offer_self`) decide what `k`/`w` mean for their call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precedence {
    /// `k > w`.
    Higher,
    /// `k < w`.
    Lower,
    /// `k == w`: for two nodes with identical ranges, a takeover rather
    /// than a valid insertion.
    Equal,
}

impl Precedence {
    pub fn compute(k: Weight, w: Weight) -> Self {
        match k.cmp(&w) {
            std::cmp::Ordering::Greater => Self::Higher,
            std::cmp::Ordering::Less => Self::Lower,
            std::cmp::Ordering::Equal => Self::Equal,
        }
    }

    /// Compare two [`SyntaxRange`]s' weights directly.
    pub fn of_syntax_ranges(a: SyntaxRange, b: SyntaxRange) -> Self {
        Self::compute(a.weight, b.weight)
    }
}
