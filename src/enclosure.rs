//! Enclosure matching: turn opener/closer token streams into balanced,
//! non-overlapping ranges suitable for [`crate::tree::offer`].
//!
//! The core rule, shared by both entry points below: keep a stack of
//! pending openers with the most recently seen one on top; for each closer,
//! scan the stack from the top for the *first* opener whose `terminal <=
//! closer.offset`, remove it (wherever it sits in the stack, not just the
//! top) and emit the pair. A closer with no eligible opener is skipped. This
//! tolerates openers that are still "open" above an eligible match — it does
//! not require strict last-in-first-out nesting, only that an opener ends
//! before the closer it pairs with begins.

use std::collections::VecDeque;

use crate::base::Range;

/// A matched opener/closer pair, plus the two derived ranges callers
/// typically want: the full enclosure (`outer`) and the gap between the
/// delimiters (`inner`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnclosurePair {
    pub open: Range,
    pub close: Range,
}

impl EnclosurePair {
    /// `[open.offset, close.terminal)`: the whole bracketed span, delimiters
    /// included.
    pub fn outer(self) -> Range {
        Range::new(self.open.offset(), self.close.terminal() - self.open.offset())
    }

    /// `[open.terminal, close.offset)`: the span strictly between the two
    /// delimiters.
    pub fn inner(self) -> Range {
        Range::new(self.open.terminal(), self.close.offset() - self.open.terminal())
    }
}

/// A single token in the combined-stream variant: either an opener or a
/// closer, carrying its own range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Open(Range),
    Close(Range),
}

/// Scan the stack (most recent opener first) for the first candidate whose
/// `terminal <= closer.offset`, and remove it if found.
fn take_eligible(stack: &mut VecDeque<Range>, closer: Range) -> Option<Range> {
    let position = stack.iter().position(|open| open.terminal() <= closer.offset())?;
    stack.remove(position)
}

/// Match two pre-split sequences: `opens` in document order, `closes` in
/// document order. Each closer is matched against the stack of openers seen
/// so far (conceptually: all of `opens`, since both sequences are known up
/// front), most-recently-pushed first.
///
/// Post-conditions: every emitted opener is used at most once; pairs are
/// well-nested; each pair satisfies `open.terminal() <= close.offset()`.
pub fn match_enclosures(opens: &[Range], closes: &[Range]) -> Vec<EnclosurePair> {
    let mut stack: VecDeque<Range> = opens.iter().rev().copied().collect();
    let mut pairs = Vec::with_capacity(closes.len());
    for &closer in closes {
        if let Some(opener) = take_eligible(&mut stack, closer) {
            pairs.push(EnclosurePair { open: opener, close: closer });
        }
    }
    pairs
}

/// Match a single interleaved stream of opener/closer tokens, in document
/// order. Identical rule to [`match_enclosures`], applied incrementally:
/// openers push onto the stack as encountered, closers trigger the
/// scan-and-remove search immediately rather than once the whole stream is
/// known.
pub fn match_delimiters<I>(tokens: I) -> Vec<EnclosurePair>
where
    I: IntoIterator<Item = Delimiter>,
{
    let mut stack: VecDeque<Range> = VecDeque::new();
    let mut pairs = Vec::new();
    for token in tokens {
        match token {
            Delimiter::Open(range) => stack.push_front(range),
            Delimiter::Close(range) => {
                if let Some(opener) = take_eligible(&mut stack, range) {
                    pairs.push(EnclosurePair { open: opener, close: range });
                }
            }
        }
    }
    pairs
}
