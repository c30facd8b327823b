use crate::N_SEATS;

/// The two seats at a heads-up showdown.
///
/// `Player` holds the catalog hand under sweep and `Opponent` the fixed
/// hole cards. Outcomes are always reported from the player's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    Player = 0,
    Opponent = 1,
}

impl Seat {
    pub const fn all() -> [Seat; N_SEATS] {
        [Seat::Player, Seat::Opponent]
    }
    pub fn other(&self) -> Seat {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }
}

/// usize isomorphism
impl From<Seat> for usize {
    fn from(seat: Seat) -> Self {
        seat as usize
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "player"),
            Seat::Opponent => write!(f, "opponent"),
        }
    }
}
