use super::moves::Move;

/// Result of comparing the first side's move against the second's.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Draw,
    FirstWins,
    SecondWins,
}

/// Resolves a round. Total over all nine ordered pairs.
pub fn resolve(first: Move, second: Move) -> Outcome {
    if first == second {
        Outcome::Draw
    } else if first.beats(&second) {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Draw => write!(f, "draw"),
            Self::FirstWins => write!(f, "first wins"),
            Self::SecondWins => write!(f, "second wins"),
        }
    }
}
