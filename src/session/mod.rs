//! Append-only round records and the statistics projected from them.
mod mode;
mod round;
mod session;
mod summary;

pub use mode::*;
pub use round::*;
pub use session::*;
pub use summary::*;
