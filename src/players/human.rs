use super::player::Player;
use crate::Move;
use anyhow::Context;
use dialoguer::Input;

/// Interactive player typing moves on the terminal.
///
/// Accepts anything the [`Move`] parse table accepts and re-prompts otherwise.
#[derive(Debug, Clone)]
pub struct Human(String);

impl Human {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
    fn prompt(&self) -> String {
        let menu = Move::all()
            .iter()
            .map(|m| format!("{}: {}", u8::from(*m), m))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}, enter your move ({})", self.0, menu)
    }
}

impl Player for Human {
    fn name(&self) -> &str {
        self.0.as_str()
    }
    fn choose(&mut self) -> anyhow::Result<Move> {
        let input = Input::<String>::new()
            .with_prompt(self.prompt())
            .validate_with(|i: &String| -> Result<(), String> {
                Move::try_from(i.as_str())
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()
            .with_context(|| format!("read move for {}", self.0))?;
        Ok(Move::try_from(input.as_str())?)
    }
}
