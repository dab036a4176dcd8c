//! Sources of moves for either side of the table.
//!
//! - [`Computer`] — uniformly random, never fails
//! - [`Human`] — prompts on the terminal (requires `cli` feature)
mod computer;
#[cfg(feature = "cli")]
mod human;
mod player;

pub use computer::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use player::*;
