use super::player::Player;
use crate::Arbitrary;
use crate::Move;

/// Opponent in single-player mode. Samples moves uniformly at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct Computer;

impl Player for Computer {
    fn name(&self) -> &str {
        "Computer"
    }
    fn choose(&mut self) -> anyhow::Result<Move> {
        Ok(Move::random())
    }
}
