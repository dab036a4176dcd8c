use super::round::Round;
use crate::Outcome;

/// Win/loss/draw counts over a sequence of rounds.
///
/// Always recomputed from the rounds; `first + second + draws == total`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub first: usize,
    pub second: usize,
    pub draws: usize,
    pub total: usize,
}

impl Summary {
    fn add(mut self, round: &Round) -> Self {
        match round.outcome() {
            Outcome::FirstWins => self.first += 1,
            Outcome::SecondWins => self.second += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total += 1;
        self
    }
}

impl<'a> FromIterator<&'a Round> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a Round>>(rounds: I) -> Self {
        rounds.into_iter().fold(Self::default(), Self::add)
    }
}

impl From<&[Round]> for Summary {
    fn from(rounds: &[Round]) -> Self {
        rounds.iter().collect()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}W {}L {}D / {}",
            self.first, self.second, self.draws, self.total
        )
    }
}
