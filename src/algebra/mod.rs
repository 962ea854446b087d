//! The range algebra: four total, pure enumerations over interval
//! endpoints that the rest of the tree dispatches on.
//!
//! [`Intersection`] is the finest-grained classification (13 variants);
//! [`Dominance`] and [`Relation`] are its direction-erased and oriented
//! quotients, respectively. [`Precedence`] orders two weights and breaks
//! ties between exactly-coincident ranges.

mod dominance;
mod intersection;
mod precedence;
mod relation;

pub use dominance::Dominance;
pub use intersection::Intersection;
pub use precedence::Precedence;
pub use relation::Relation;
