use crate::N_BOARD;
use crate::N_CARDS;
use crate::cards::Board;
use crate::showdown::Outcome;

/// Outcome tag of a stored record, with an extra state for slots the
/// engine has not written yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Tag {
    Unset = 0,
    Win = 1,
    Lose = 2,
    Tie = 3,
}

impl From<Outcome> for Tag {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Tag::Win,
            Outcome::Lose => Tag::Lose,
            Outcome::Tie => Tag::Tie,
        }
    }
}

/// One showdown in the dense result buffer: the board dealt and how the
/// player fared on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    board: [u8; N_BOARD],
    tag: Tag,
}

impl Record {
    /// bytes per record on disk
    pub const SIZE: usize = N_BOARD + 1;
    /// placeholder for slots not yet written
    pub const UNSET: Self = Self {
        board: [0; N_BOARD],
        tag: Tag::Unset,
    };

    pub fn is_set(&self) -> bool {
        self.tag != Tag::Unset
    }
    pub fn board(&self) -> Option<Board> {
        self.is_set().then(|| Board::from(self.board))
    }
    pub fn outcome(&self) -> Option<Outcome> {
        match self.tag {
            Tag::Unset => None,
            Tag::Win => Some(Outcome::Win),
            Tag::Lose => Some(Outcome::Lose),
            Tag::Tie => Some(Outcome::Tie),
        }
    }
}

impl From<(Board, Outcome)> for Record {
    fn from((board, outcome): (Board, Outcome)) -> Self {
        Self {
            board: <[u8; N_BOARD]>::from(board),
            tag: Tag::from(outcome),
        }
    }
}

/// on-disk layout: board card indices then tag byte
impl From<Record> for [u8; Record::SIZE] {
    fn from(record: Record) -> Self {
        let [a, b, c, t, r] = record.board;
        [a, b, c, t, r, record.tag as u8]
    }
}

impl TryFrom<[u8; Record::SIZE]> for Record {
    type Error = String;
    fn try_from(bytes: [u8; Record::SIZE]) -> Result<Self, Self::Error> {
        let [a, b, c, t, r, tag] = bytes;
        let tag = match tag {
            0 => Tag::Unset,
            1 => Tag::Win,
            2 => Tag::Lose,
            3 => Tag::Tie,
            x => return Err(format!("invalid record tag: {}", x)),
        };
        let board = [a, b, c, t, r];
        if tag != Tag::Unset {
            if board.iter().any(|&x| x as usize >= N_CARDS) {
                return Err(format!("invalid record board: {:?} has a card out of range", board));
            }
            if board.windows(2).any(|w| w[0] >= w[1]) {
                return Err(format!("invalid record board: {:?} is not strictly ascending", board));
            }
        }
        Ok(Self { board, tag })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.board(), self.outcome()) {
            (Some(board), Some(outcome)) => write!(f, "{} {}", board, outcome),
            _ => write!(f, "unset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_has_no_outcome() {
        assert!(!Record::UNSET.is_set());
        assert_eq!(Record::UNSET.outcome(), None);
        assert_eq!(Record::UNSET.board(), None);
    }

    #[test]
    fn bytes_layout() {
        let board = Board::try_from("2c 3c 4c 5c 6c").unwrap();
        let record = Record::from((board, Outcome::Tie));
        let bytes = <[u8; Record::SIZE]>::from(record);
        assert_eq!(bytes, [0, 4, 8, 12, 16, 3]);
        assert_eq!(Record::try_from(bytes), Ok(record));
        assert!(Record::try_from([0, 4, 8, 12, 16, 9]).is_err());
    }

    #[test]
    fn corrupt_boards_are_rejected() {
        assert!(Record::try_from([200, 201, 202, 203, 204, 1]).is_err());
        assert!(Record::try_from([0, 4, 8, 12, 52, 2]).is_err());
        assert!(Record::try_from([4, 0, 8, 12, 16, 3]).is_err());
        assert!(Record::try_from([0, 4, 4, 12, 16, 1]).is_err());
        assert_eq!(Record::try_from([0; Record::SIZE]), Ok(Record::UNSET));
    }
}
