use thiserror::Error;

/// Failures parsing user-facing text into game values.
///
/// Everything past parsing is total: resolving, recording and summarising
/// rounds cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid move {0:?}, expected rock (1), scissors (2) or paper (3)")]
    InvalidMove(String),
    #[error("invalid mode {0:?}, expected single or multi (1 or 2)")]
    InvalidMode(String),
}
