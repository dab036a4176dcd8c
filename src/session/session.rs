use super::mode::Mode;
use super::round::Round;
use super::summary::Summary;
use crate::Move;

/// Ordered, append-only record of every round played together.
///
/// The summary is never stored; it is projected from the rounds on demand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    mode: Mode,
    rounds: Vec<Round>,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            rounds: Vec::new(),
        }
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn len(&self) -> usize {
        self.rounds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }
    /// Resolves and appends the next round.
    pub fn record(&mut self, first: Move, second: Move) -> Round {
        let round = Round::new(self.rounds.len() + 1, first, second);
        log::debug!("recorded {}", round);
        self.rounds.push(round);
        round
    }
    pub fn summary(&self) -> Summary {
        Summary::from(self.rounds.as_slice())
    }
    /// Human-readable report: header, one line per round in order, then totals.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mode = self.mode;
        let summary = self.summary();
        writeln!(out, "Rock-Paper-Scissors statistics")?;
        writeln!(out, "Mode: {}", mode)?;
        writeln!(out)?;
        for round in self.rounds() {
            writeln!(
                out,
                "Round {}: {} chose {}, {} chose {} - {}",
                round.index(),
                mode.first(),
                round.first(),
                mode.opponent(),
                round.second(),
                mode.verdict(round.outcome()),
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Final statistics:")?;
        writeln!(out, "{} wins: {}", mode.first(), summary.first)?;
        writeln!(out, "{} wins: {}", mode.opponent(), summary.second)?;
        writeln!(out, "Draws: {}", summary.draws)?;
        writeln!(out, "Total rounds: {}", summary.total)?;
        Ok(())
    }
}
