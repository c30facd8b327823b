use super::card::Card;
use super::hand::Hand;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards
/// are present.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Both cards, lower index first.
    pub fn cards(&self) -> [Card; 2] {
        let mut cards = self.0;
        let lo = cards.next().expect("two cards in hole");
        let hi = cards.next().expect("two cards in hole");
        [lo, hi]
    }
    pub fn lo(&self) -> Card {
        self.cards()[0]
    }
    pub fn hi(&self) -> Card {
        self.cards()[1]
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        debug_assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err(format!("hole must contain exactly two cards: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_cards() {
        let hole = Hole::try_from("Qd Td").unwrap();
        assert_eq!(hole.lo(), Card::from(33));
        assert_eq!(hole.hi(), Card::from(41));
    }

    #[test]
    fn exactly_two() {
        assert!(Hole::try_from("Qd").is_err());
        assert!(Hole::try_from("Qd Td 2c").is_err());
        assert!(Hole::try_from("Qd Qd").is_err());
    }
}
