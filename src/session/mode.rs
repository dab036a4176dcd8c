use crate::Error;
use crate::Outcome;

/// Who sits on the second side of the table.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One human against the computer.
    #[default]
    Single,
    /// Two humans sharing the terminal.
    Multi,
}

impl Mode {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Single => "single player (vs computer)",
            Self::Multi => "two players",
        }
    }
    pub const fn first(&self) -> &'static str {
        "Player 1"
    }
    /// Name of the second side.
    pub const fn opponent(&self) -> &'static str {
        match self {
            Self::Single => "Computer",
            Self::Multi => "Player 2",
        }
    }
    pub fn verdict(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Draw => String::from("Draw"),
            Outcome::FirstWins => format!("{} wins", self.first()),
            Outcome::SecondWins => format!("{} wins", self.opponent()),
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "1" | "single" => Ok(Self::Single),
            "2" | "multi" => Ok(Self::Multi),
            _ => Err(Error::InvalidMode(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
