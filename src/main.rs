//! Rock-Paper-Scissors Binary
//!
//! Plays an interactive session and writes its statistics to disk.
//!
//! Options: --mode, --rounds, --output, --format, --no-color, --verbose

use clap::Parser;
use colored::Colorize;
use rochambeau::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level())?;
    if args.no_color {
        colored::control::set_override(false);
    }
    println!("{}", "Rock-Paper-Scissors".blue());
    let mode = args.mode()?;
    let rounds = args.rounds()?;
    let session = Game::from((mode, rounds)).play(&mut std::io::stdout())?;
    save(&session, &args.output, args.format)?;
    println!();
    println!("Game statistics saved to '{}'", args.output.display());
    Ok(())
}
