use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use crate::N_BOARD;
use crate::N_DEAD;
use crate::N_RESIDUAL;

/// The residual deck: every card not already dealt as hole cards.
///
/// Cards are stored in ascending index order, so a deck position is a
/// stable coordinate for board enumeration and result offsets. The dead
/// set must hold exactly [`N_DEAD`] cards; callers check for overlapping
/// hole cards before building a deck (see [`Matchup`]).
///
/// [`Matchup`]: crate::sweep::Matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck([Card; N_RESIDUAL]);

impl Deck {
    pub fn cards(&self) -> &[Card; N_RESIDUAL] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// the board dealt from these deck positions
    pub fn board(&self, positions: &[usize; N_BOARD]) -> Board {
        Board::from(positions.map(|i| self.0[i]))
    }
}

/// build from the dead cards it excludes
impl From<Hand> for Deck {
    fn from(dead: Hand) -> Self {
        assert!(dead.size() == N_DEAD, "dead set must hold {} cards", N_DEAD);
        let mut cards = [Card::from(0); N_RESIDUAL];
        for (slot, card) in cards.iter_mut().zip(dead.complement()) {
            *slot = card;
        }
        Self(cards)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Hand::from(deck.0.as_slice())
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
