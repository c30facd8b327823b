use crate::SweepError;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::showdown::Table;

/// A catalog hand seated against the fixed opponent.
///
/// Construction is where overlapping hole cards are caught. Once a
/// matchup exists its four dead cards are distinct and its residual deck
/// always holds exactly 48 cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    player: Hole,
    opponent: Hole,
}

impl Matchup {
    pub fn player(&self) -> Hole {
        self.player
    }
    pub fn opponent(&self) -> Hole {
        self.opponent
    }
    /// cards out of the deck before the board is dealt
    pub fn dead(&self) -> Hand {
        Hand::add(Hand::from(self.player), Hand::from(self.opponent))
    }
    pub fn deck(&self) -> Deck {
        Deck::from(self.dead())
    }
    pub fn table(&self, board: Board) -> Table {
        Table::new(self.player, self.opponent, board)
    }
}

impl TryFrom<(Hole, Hole)> for Matchup {
    type Error = SweepError;
    fn try_from((player, opponent): (Hole, Hole)) -> Result<Self, Self::Error> {
        match Hand::intersect(Hand::from(player), Hand::from(opponent)).next() {
            Some(card) => Err(SweepError::Overlap(card)),
            None => Ok(Self { player, opponent }),
        }
    }
}

impl std::fmt::Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} v {}", self.player, self.opponent)
    }
}
