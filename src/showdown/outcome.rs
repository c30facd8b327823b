use crate::Score;
use std::cmp::Ordering;

/// Result of one showdown from the player's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Higher score wins, equal scores tie.
    pub fn classify(player: Score, opponent: Score) -> Self {
        Self::from(player.cmp(&opponent))
    }
    /// The same showdown seen from the other seat.
    pub fn flip(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Lose,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "W"),
            Outcome::Lose => write!(f, "L"),
            Outcome::Tie => write!(f, "T"),
        }
    }
}
