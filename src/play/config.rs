use crate::DEFAULT_ROUNDS;
use crate::Format;
use crate::MIN_ROUNDS;
use crate::Mode;
use crate::STATS_FILE;
use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use std::path::PathBuf;

/// Command-line configuration. Mode and round count are asked for
/// interactively when not given as flags.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Play against the computer or another human
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Number of rounds to play (at least 1)
    #[arg(long, allow_negative_numbers = true)]
    pub rounds: Option<i64>,
    /// Where to write the statistics at the end of the game
    #[arg(long, default_value = STATS_FILE)]
    pub output: PathBuf,
    /// Encoding of the statistics file
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Log debug output to the terminal
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }
    pub fn mode(&self) -> anyhow::Result<Mode> {
        match self.mode {
            Some(mode) => Ok(mode),
            None => Input::<String>::new()
                .with_prompt(format!(
                    "Choose a mode (1: {}, 2: {})",
                    Mode::Single,
                    Mode::Multi
                ))
                .default(String::from("1"))
                .interact_text()
                .context("read mode")
                .map(|text| mode_or_default(&text)),
        }
    }
    pub fn rounds(&self) -> anyhow::Result<usize> {
        match self.rounds {
            Some(n) => Ok(at_least_min_rounds(n)),
            None => Input::<String>::new()
                .with_prompt("Number of rounds")
                .default(DEFAULT_ROUNDS.to_string())
                .interact_text()
                .context("read round count")
                .map(|text| rounds_or_default(&text)),
        }
    }
}

/// Parses a mode selection, falling back to single player.
pub fn mode_or_default(text: &str) -> Mode {
    Mode::try_from(text).unwrap_or_else(|e| {
        log::warn!("{}, defaulting to {}", e, Mode::default());
        Mode::default()
    })
}

/// Parses a round count, falling back to the default and never below the minimum.
pub fn rounds_or_default(text: &str) -> usize {
    text.trim()
        .parse::<i64>()
        .map(at_least_min_rounds)
        .unwrap_or_else(|_| {
            log::warn!("invalid round count {:?}, defaulting to {}", text, DEFAULT_ROUNDS);
            DEFAULT_ROUNDS
        })
}

fn at_least_min_rounds(n: i64) -> usize {
    n.max(MIN_ROUNDS as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_fallbacks() {
        assert_eq!(rounds_or_default("5"), 5);
        assert_eq!(rounds_or_default(" 12 "), 12);
        assert_eq!(rounds_or_default("0"), MIN_ROUNDS);
        assert_eq!(rounds_or_default("many"), DEFAULT_ROUNDS);
        assert_eq!(rounds_or_default(""), DEFAULT_ROUNDS);
    }

    #[test]
    fn negative_rounds_coerce_to_minimum() {
        assert_eq!(rounds_or_default("-4"), MIN_ROUNDS);
        assert_eq!(rounds_or_default(" -1 "), MIN_ROUNDS);
        let args = Args::parse_from(["rochambeau", "--rounds", "-7"]);
        assert_eq!(args.rounds().unwrap(), MIN_ROUNDS);
    }

    #[test]
    fn mode_fallbacks() {
        assert_eq!(mode_or_default("1"), Mode::Single);
        assert_eq!(mode_or_default("2"), Mode::Multi);
        assert_eq!(mode_or_default("7"), Mode::Single);
    }

    #[test]
    fn flags() {
        let args = Args::parse_from([
            "rochambeau",
            "--mode",
            "multi",
            "--rounds",
            "0",
            "--format",
            "json",
            "--output",
            "out.json",
        ]);
        assert_eq!(args.mode().unwrap(), Mode::Multi);
        assert_eq!(args.rounds().unwrap(), MIN_ROUNDS);
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.output, PathBuf::from("out.json"));
        assert_eq!(args.level(), log::LevelFilter::Warn);
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["rochambeau"]);
        assert_eq!(args.mode, None);
        assert_eq!(args.rounds, None);
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.output, PathBuf::from(STATS_FILE));
        assert!(!args.no_color);
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
