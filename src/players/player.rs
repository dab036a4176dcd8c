use crate::Move;

/// Anything that can pick a move for one side of a round.
///
/// The game loop asks each side in turn and never inspects how the move was
/// produced: terminal prompts, random sampling and scripted sequences all
/// look the same from here.
pub trait Player {
    /// Name shown in transcripts, e.g. "Player 1" or "Computer".
    fn name(&self) -> &str;
    /// Pick the move for the upcoming round.
    fn choose(&mut self) -> anyhow::Result<Move>;
}
