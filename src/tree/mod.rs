//! The managed index syntax tree itself: node storage ([`arena`]), the
//! link primitives that are the only code allowed to write a neighbor
//! field ([`links`]), derived read-only walks ([`navigation`]),
//! structural mutators ([`mutation`]), and the `offer`/`compute` insertion
//! family (below).

mod arena;
mod compute;
mod links;
mod node;
mod offer;
mod relate;

mod mutation;
mod navigation;

pub use arena::Arena;
pub use compute::{Fantom, compute};
pub use navigation::{Children, Collect, Hierarchy};
pub use node::{Links, Node, NodeId, Side};
pub use offer::offer;
