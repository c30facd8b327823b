use super::seat::Seat;
use crate::Arbitrary;
use crate::N_BOARD;
use crate::N_CARDS;
use crate::N_DEAD;
use crate::N_SEATS;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Hole;

/// Everything face up at showdown: both holes and the full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    holes: [Hole; N_SEATS],
    board: Board,
}

impl Table {
    pub fn new(player: Hole, opponent: Hole, board: Board) -> Self {
        Self {
            holes: [player, opponent],
            board,
        }
    }
    pub fn hole(&self, seat: Seat) -> Hole {
        self.holes[usize::from(seat)]
    }
    pub fn board(&self) -> Board {
        self.board
    }
    /// The seven cards a seat makes its best five from.
    pub fn hand(&self, seat: Seat) -> Hand {
        Hand::add(Hand::from(self.hole(seat)), Hand::from(self.board))
    }
    /// The same table with the seats exchanged.
    pub fn swap(&self) -> Self {
        Self::new(self.holes[1], self.holes[0], self.board)
    }
}

impl Arbitrary for Table {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let cards = rand::seq::index::sample(rng, N_CARDS, N_DEAD + N_BOARD)
            .into_iter()
            .map(|i| Card::from(i as u8))
            .collect::<Vec<_>>();
        let player = Hole::from((cards[0], cards[1]));
        let opponent = Hole::from((cards[2], cards[3]));
        let mut board = [cards[4], cards[5], cards[6], cards[7], cards[8]];
        board.sort();
        Self::new(player, opponent, Board::from(board))
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} v {} | {}", self.holes[0], self.holes[1], self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_share_the_board() {
        let table = Table::random();
        let board = Hand::from(table.board());
        for seat in Seat::all() {
            assert_eq!(table.hand(seat).size(), 7);
            assert_eq!(Hand::intersect(table.hand(seat), board), board);
        }
        let player = Hand::from(table.hole(Seat::Player));
        let opponent = Hand::from(table.hole(Seat::Opponent));
        assert_eq!(Hand::intersect(player, opponent), Hand::empty());
    }

    #[test]
    fn swap_exchanges_holes() {
        let table = Table::random();
        assert_eq!(table.swap().hole(Seat::Player), table.hole(Seat::Opponent));
        assert_eq!(table.swap().swap(), table);
    }
}
