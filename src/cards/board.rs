use super::card::Card;
use super::hand::Hand;
use crate::N_BOARD;

/// A complete five-card board: flop, turn and river.
///
/// Cards are held in ascending index order, the order in which
/// [`BoardIterator`] selects them from the residual deck.
///
/// [`BoardIterator`]: crate::sweep::BoardIterator
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Board([Card; N_BOARD]);

impl Board {
    pub fn cards(&self) -> &[Card; N_BOARD] {
        &self.0
    }
    pub fn flop(&self) -> [Card; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
    pub fn turn(&self) -> Card {
        self.0[3]
    }
    pub fn river(&self) -> Card {
        self.0[4]
    }
}

impl From<[Card; N_BOARD]> for Board {
    fn from(cards: [Card; N_BOARD]) -> Self {
        debug_assert!(cards.windows(2).all(|w| w[0] < w[1]));
        Self(cards)
    }
}

/// u8 array isomorphism, the layout of a result record
impl From<Board> for [u8; N_BOARD] {
    fn from(board: Board) -> Self {
        board.0.map(u8::from)
    }
}
impl From<[u8; N_BOARD]> for Board {
    fn from(bytes: [u8; N_BOARD]) -> Self {
        Self::from(bytes.map(Card::from))
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        Hand::from(board.0.as_slice())
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        Vec::<Card>::from(hand)
            .try_into()
            .map(Self)
            .map_err(|_| format!("board must contain exactly five cards: {}", s))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, t, r] = self.0;
        write!(f, "{}{}{} {} {}", a, b, c, t, r)
    }
}
