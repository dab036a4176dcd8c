use crate::Arbitrary;
use crate::Error;

/// One of the three hand shapes.
///
/// Dominance is cyclic: Rock crushes Scissors, Scissors cut Paper,
/// Paper covers Rock. The numeric encoding follows the selection menu
/// (1 = Rock, 2 = Scissors, 3 = Paper), not the dominance cycle.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Move {
    Rock = 1,
    Scissors = 2,
    Paper = 3,
}

impl Move {
    pub const fn all() -> &'static [Self] {
        &[Self::Rock, Self::Scissors, Self::Paper]
    }
    /// The move this one defeats.
    pub const fn victim(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.victim() == *other
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Scissors => "Scissors",
            Self::Paper => "Paper",
        }
    }
    #[rustfmt::skip]
    pub const fn art(&self) -> &'static str {
        match self {
            Self::Rock => concat!(
                "     _______\n",
                "---'   ____)\n",
                "      (_____)\n",
                "      (_____)\n",
                "      (____)\n",
                "---.__(___)",
            ),
            Self::Scissors => concat!(
                "     _______\n",
                "---'   ____)____\n",
                "          ______)\n",
                "       __________)\n",
                "      (____)\n",
                "---.__(___)",
            ),
            Self::Paper => concat!(
                "     _______\n",
                "---'    ____)____\n",
                "           ______)\n",
                "          _______)\n",
                "         _______)\n",
                "---.__________)",
            ),
        }
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// str isomorphism, modulo case, whitespace and aliases
impl TryFrom<&str> for Move {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" | "камень" | "1" => Ok(Self::Rock),
            "scissors" | "s" | "ножницы" | "2" => Ok(Self::Scissors),
            "paper" | "p" | "бумага" | "3" => Ok(Self::Paper),
            _ => Err(Error::InvalidMove(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Scissors,
            _ => Self::Paper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_is_cyclic() {
        for m in Move::all() {
            assert!(m.victim() != *m);
            assert!(m.victim().victim().victim() == *m);
            assert!(!m.beats(m));
        }
    }

    #[test]
    fn exactly_one_side_beats() {
        for a in Move::all() {
            for b in Move::all().iter().filter(|b| *b != a) {
                assert!(a.beats(b) ^ b.beats(a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn parse_aliases() {
        for (text, m) in [
            ("rock", Move::Rock),
            ("  ROCK ", Move::Rock),
            ("1", Move::Rock),
            ("Камень", Move::Rock),
            ("scissors", Move::Scissors),
            ("2", Move::Scissors),
            ("ножницы", Move::Scissors),
            ("paper", Move::Paper),
            ("3", Move::Paper),
            ("бумага", Move::Paper),
        ] {
            assert_eq!(Move::try_from(text), Ok(m), "{:?}", text);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in ["", "4", "0", "lizard", "spock", "rockpaper"] {
            assert_eq!(
                Move::try_from(text),
                Err(Error::InvalidMove(text.to_string()))
            );
        }
    }

    #[test]
    fn menu_numbers_parse_back() {
        for m in Move::all() {
            let number = u8::from(*m).to_string();
            assert_eq!(Move::try_from(number.as_str()), Ok(*m));
        }
    }

    #[test]
    fn random_covers_all_moves() {
        let seen = (0..256)
            .map(|_| Move::random())
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(seen.len(), 3);
    }
}
