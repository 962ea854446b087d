//! Foundation types for the MIST toolchain.
//!
//! This module has no dependencies on other `mist` modules: it only carries
//! the buffer-range and weight primitives that everything else is built on.

mod range;

pub use range::{Range, SyntaxRange, TextRange, TextSize, Weight};
