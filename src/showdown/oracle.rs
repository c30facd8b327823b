use super::outcome::Outcome;
use super::seat::Seat;
use super::table::Table;
use crate::Score;
use crate::cards::Strength;
use crate::game::Game;

/// Ranks one seat's holding at a complete table.
///
/// Implementations must be pure: the same table and seat always produce
/// the same score, and scores are only compared between the two seats of
/// one table. `Sync` so a single oracle can be shared by every sweep unit.
pub trait Showdown: Sync {
    fn rank(&self, table: &Table, seat: Seat) -> Score;

    /// Rank both seats and classify from the player's side.
    fn showdown(&self, table: &Table) -> Outcome {
        let player = self.rank(table, Seat::Player);
        let opponent = self.rank(table, Seat::Opponent);
        Outcome::classify(player, opponent)
    }
}

/// Best five of seven, packed so that integer order is hand order.
impl Showdown for Game {
    fn rank(&self, table: &Table, seat: Seat) -> Score {
        Score::from(Strength::from(table.hand(seat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::Board;
    use crate::cards::Hole;

    fn table(player: &str, opponent: &str, board: &str) -> Table {
        Table::new(
            Hole::try_from(player).unwrap(),
            Hole::try_from(opponent).unwrap(),
            Board::try_from(board).unwrap(),
        )
    }

    #[test]
    fn known_showdowns() {
        let game = Game::holdem();
        let cases = [
            ("Ah As", "Qd Td", "2c 7h 9s Jd 4c", Outcome::Win),
            ("Ah As", "Qd Td", "Jc 9h 8s 2c 3h", Outcome::Lose),
            ("Ah As", "Qd Td", "2c 3c 4c 5c 6c", Outcome::Tie),
            ("Ah As", "Qd Td", "Ks Kh Kd Kc Qh", Outcome::Win),
            ("2h 3s", "Qd Td", "Ac Kc Qc Jc Tc", Outcome::Tie),
            ("2h 3h", "Qd Td", "4h 5h 9h Ad Kc", Outcome::Win),
        ];
        for (player, opponent, board, outcome) in cases {
            let table = table(player, opponent, board);
            assert_eq!(game.showdown(&table), outcome, "{}", table);
        }
    }

    #[test]
    fn symmetric_under_seat_swap() {
        let game = Game::holdem();
        for _ in 0..1000 {
            let table = Table::random();
            assert_eq!(game.showdown(&table), game.showdown(&table.swap()).flip());
        }
    }
}
