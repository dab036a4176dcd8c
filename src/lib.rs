//! Rock-Paper-Scissors with per-round tracking and persisted statistics.
//!
//! The crate is split into a pure core and an interactive shell.
//!
//! ## Core
//!
//! - [`Move`] — Rock, Paper or Scissors
//! - [`Outcome`] — result of comparing two moves, see [`resolve`]
//! - [`Round`] — one resolved comparison, numbered from 1
//! - [`Session`] — append-only sequence of rounds
//! - [`Summary`] — win/loss/draw counts projected from a session
//! - [`save`] — report persistence as text or JSON
//!
//! ## Shell (requires `cli` feature)
//!
//! - [`Player`] implementations, [`Human`] and [`Computer`]
//! - [`Game`] — the interactive round loop
//! - [`Args`] — command-line configuration
mod error;
#[cfg(feature = "cli")]
mod play;
mod players;
mod rules;
mod session;
mod storage;

pub use error::*;
#[cfg(feature = "cli")]
pub use play::*;
pub use players::*;
pub use rules::*;
pub use session::*;
pub use storage::*;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Rounds played when none are given or the given value does not parse.
pub const DEFAULT_ROUNDS: usize = 3;
/// Minimum number of rounds in a session.
pub const MIN_ROUNDS: usize = 1;
/// Default destination of the persisted statistics.
pub const STATS_FILE: &str = "game_stats.txt";
/// Directory receiving timestamped debug logs.
pub const LOGS_DIR: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(LOGS_DIR).context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let path = format!("{}/{}.log", LOGS_DIR, time);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).with_context(|| format!("create log file {}", path))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
