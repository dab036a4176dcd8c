//! Moves and the cyclic dominance rule that resolves them.
mod moves;
mod outcome;

pub use moves::*;
pub use outcome::*;
