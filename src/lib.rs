//! # mist
//!
//! A Managed Index Syntax Tree (MIST): a self-ordering, two-dimensional tree
//! over half-open byte ranges `[offset, offset+length)`, used to represent
//! nested syntactic fragments over an external text buffer that the tree
//! itself never stores.
//!
//! ## Module structure (dependency order)
//!
//! ```text
//! enclosure → bracket-matcher that feeds `offer` with balanced ranges
//!   ↓
//! tree      → arena, links, navigation, pop/remove/clear, offer/compute
//!   ↓
//! algebra   → Intersection/Dominance/Relation/Precedence
//!   ↓
//! base      → Range/SyntaxRange/Weight primitives
//! ```
//!
//! `error` sits beside all of them: every fallible operation in `tree` and
//! `enclosure` returns `Result<_, error::TreeError>`.

/// Foundation types: half-open buffer ranges and the weight tie-break.
pub mod base;

/// The range algebra: `Intersection`, `Dominance`, `Relation`, `Precedence`.
pub mod algebra;

/// The managed index syntax tree: arena, links, navigation, mutation,
/// `offer`/`compute`.
pub mod tree;

/// Bracket/enclosure matching: turns opener/closer streams into balanced
/// ranges suitable for `offer`.
pub mod enclosure;

/// The error taxonomy shared by every fallible operation in this crate.
pub mod error;

pub use algebra::{Dominance, Intersection, Precedence, Relation};
pub use base::{Range, SyntaxRange, TextRange, TextSize, Weight};
pub use error::{NodeChain, TreeError};
pub use tree::{Arena, Fantom, Node, NodeId, Side};
