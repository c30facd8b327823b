use crate::N_HANDS;
use crate::N_RANKS;
use crate::N_SUITS;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Suit;

/// Suit of the lower card, and of both cards in a suited hand.
const LO_SUIT: Suit = Suit::H;
/// Suit of the higher card in a pair or offsuit hand.
const HI_SUIT: Suit = Suit::S;

const fn card(rank: usize, suit: Suit) -> u8 {
    (rank * N_SUITS) as u8 + suit as u8
}

/// 78 suited, 13 pairs, 78 offsuit; low rank then high rank ascending.
const fn canonical() -> [[u8; 2]; N_HANDS] {
    let mut table = [[0u8; 2]; N_HANDS];
    let mut i = 0;
    let mut lo = 0;
    while lo < N_RANKS {
        let mut hi = lo + 1;
        while hi < N_RANKS {
            table[i] = [card(lo, LO_SUIT), card(hi, LO_SUIT)];
            i += 1;
            hi += 1;
        }
        lo += 1;
    }
    let mut rank = 0;
    while rank < N_RANKS {
        table[i] = [card(rank, LO_SUIT), card(rank, HI_SUIT)];
        i += 1;
        rank += 1;
    }
    let mut lo = 0;
    while lo < N_RANKS {
        let mut hi = lo + 1;
        while hi < N_RANKS {
            table[i] = [card(lo, LO_SUIT), card(hi, HI_SUIT)];
            i += 1;
            hi += 1;
        }
        lo += 1;
    }
    assert!(i == N_HANDS);
    table
}

/// Card indices of the 169 canonical starting hands.
pub const CANONICAL: [[u8; 2]; N_HANDS] = canonical();

/// An ordered list of player hole cards to sweep.
///
/// The canonical catalog holds one representative per starting-hand
/// category. Position in the catalog is the hand's index into the dense
/// result buffer, so the order never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Vec<Hole>);

impl Catalog {
    pub fn canonical() -> Self {
        Self(
            CANONICAL
                .iter()
                .map(|&[a, b]| Hole::from((Card::from(a), Card::from(b))))
                .collect(),
        )
    }
    /// the first n entries
    pub fn take(&self, n: usize) -> Self {
        Self(self.0.iter().copied().take(n).collect())
    }
    pub fn holes(&self) -> &[Hole] {
        &self.0
    }
    pub fn get(&self, i: usize) -> Option<&Hole> {
        self.0.get(i)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Hole> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::canonical()
    }
}

impl From<Vec<Hole>> for Catalog {
    fn from(holes: Vec<Hole>) -> Self {
        Self(holes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N_OFFSUIT;
    use crate::N_PAIRS;
    use crate::N_SUITED;
    use crate::cards::Hand;
    use crate::catalog::Category;
    use std::collections::BTreeSet;

    #[test]
    fn one_entry_per_category() {
        let catalog = Catalog::canonical();
        let labels = catalog.iter().map(Category::label).collect::<BTreeSet<_>>();
        assert_eq!(catalog.len(), N_HANDS);
        assert_eq!(labels.len(), N_HANDS);
    }

    #[test]
    fn grouped_suited_pairs_offsuit() {
        let categories = Catalog::canonical()
            .iter()
            .map(|h| Category::from(*h))
            .collect::<Vec<_>>();
        let (suited, rest) = categories.split_at(N_SUITED);
        let (pairs, offsuit) = rest.split_at(N_PAIRS);
        assert!(suited.iter().all(|c| *c == Category::Suited));
        assert!(pairs.iter().all(|c| *c == Category::Pair));
        assert!(offsuit.iter().all(|c| *c == Category::Offsuit));
        assert_eq!(offsuit.len(), N_OFFSUIT);
    }

    #[test]
    fn drawn_from_hearts_and_spades() {
        let minors = Hand::from(u64::from(Suit::C) | u64::from(Suit::D));
        for hole in Catalog::canonical().iter() {
            assert_eq!(Hand::intersect(Hand::from(*hole), minors), Hand::empty());
        }
    }

    #[test]
    fn known_positions() {
        let catalog = Catalog::canonical();
        let first = catalog.get(0).map(Category::label);
        let aces = catalog.get(N_SUITED + N_PAIRS - 1).map(Category::label);
        let last = catalog.get(N_HANDS - 1).map(Category::label);
        assert_eq!(first.as_deref(), Some("32s"));
        assert_eq!(aces.as_deref(), Some("AA"));
        assert_eq!(last.as_deref(), Some("AKo"));
        assert_eq!(
            catalog.get(N_SUITED + N_PAIRS - 1),
            Hole::try_from("Ah As").ok().as_ref()
        );
    }

    #[test]
    fn take_prefix() {
        let catalog = Catalog::canonical().take(3);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(2), Catalog::canonical().get(2));
    }
}
