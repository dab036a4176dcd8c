//! Interactive shell around the core: round loop and command-line configuration.
mod config;
mod game;

pub use config::*;
pub use game::*;
