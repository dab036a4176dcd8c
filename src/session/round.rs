use crate::Move;
use crate::Outcome;
use crate::resolve;

/// One resolved comparison of two moves.
///
/// Only a [`Session`](super::Session) creates rounds, so indices are
/// sequential from 1 and the outcome always agrees with the moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Round {
    index: usize,
    first: Move,
    second: Move,
    outcome: Outcome,
}

impl Round {
    pub(super) fn new(index: usize, first: Move, second: Move) -> Self {
        debug_assert!(index > 0);
        Self {
            index,
            first,
            second,
            outcome: resolve(first, second),
        }
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn first(&self) -> Move {
        self.first
    }
    pub fn second(&self) -> Move {
        self.second
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{} {} vs {}: {}",
            self.index, self.first, self.second, self.outcome
        )
    }
}
