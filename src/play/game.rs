use crate::Computer;
use crate::Human;
use crate::MIN_ROUNDS;
use crate::Mode;
use crate::Outcome;
use crate::Player;
use crate::Round;
use crate::Session;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

/// Plays a fixed number of rounds between two players, printing a
/// transcript to the given sink and recording every round into a [`Session`].
pub struct Game {
    rounds: usize,
    session: Session,
    first: Box<dyn Player>,
    second: Box<dyn Player>,
}

impl Game {
    pub fn new(
        mode: Mode,
        rounds: usize,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
    ) -> Self {
        Self {
            rounds: rounds.max(MIN_ROUNDS),
            session: Session::new(mode),
            first,
            second,
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn play<W: Write>(mut self, out: &mut W) -> anyhow::Result<Session> {
        log::info!("starting {} rounds, {}", self.rounds, self.session.mode());
        for i in 1..=self.rounds {
            self.begin_round(out, i)?;
            let round = self.end_round(out)?;
            debug_assert!(round.index() == i);
        }
        self.finish(out)?;
        log::info!("finished with {}", self.session.summary());
        Ok(self.session)
    }

    fn begin_round<W: Write>(&self, out: &mut W, i: usize) -> anyhow::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", format!("Round {} of {}", i, self.rounds).yellow())?;
        out.flush().context("flush transcript")
    }

    fn end_round<W: Write>(&mut self, out: &mut W) -> anyhow::Result<Round> {
        let a = self.first.choose()?;
        let b = self.second.choose()?;
        writeln!(out)?;
        writeln!(out, "{}", format!("{} chose: {}", self.first.name(), a).green())?;
        writeln!(out, "{}", a.art())?;
        writeln!(out, "{}", format!("{} chose: {}", self.second.name(), b).red())?;
        writeln!(out, "{}", b.art())?;
        let round = self.session.record(a, b);
        writeln!(out, "{}", self.announce(&round))?;
        Ok(round)
    }

    fn announce(&self, round: &Round) -> colored::ColoredString {
        let verdict = match round.outcome() {
            Outcome::Draw => String::from("Draw!"),
            Outcome::FirstWins => format!("{} wins!", self.first.name()),
            Outcome::SecondWins => format!("{} wins!", self.second.name()),
        };
        match round.outcome() {
            Outcome::Draw => verdict.yellow(),
            Outcome::FirstWins => verdict.green(),
            Outcome::SecondWins => verdict.red(),
        }
    }

    fn finish<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let summary = self.session.summary();
        writeln!(out)?;
        writeln!(out, "{}", "Final statistics:".blue())?;
        writeln!(out, "{} wins: {}", self.first.name(), summary.first)?;
        writeln!(out, "{} wins: {}", self.second.name(), summary.second)?;
        writeln!(out, "Draws: {}", summary.draws)?;
        out.flush().context("flush transcript")
    }
}

/// Seats the players a mode calls for: a human first, then either the
/// computer or a second human.
impl From<(Mode, usize)> for Game {
    fn from((mode, rounds): (Mode, usize)) -> Self {
        let first = Box::new(Human::new(mode.first()));
        let second: Box<dyn Player> = match mode {
            Mode::Single => Box::new(Computer),
            Mode::Multi => Box::new(Human::new(mode.opponent())),
        };
        Self::new(mode, rounds, first, second)
    }
}
