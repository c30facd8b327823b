use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::Score;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category like flush or two pair) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers.
///
/// Constructed from a [`Hand`] by running the [`Evaluator`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

/// Score packing, order-preserving
///
/// xxxxxxx cccc pppp ssss AKQJT98765432
/// category, primary rank, secondary rank, kicker mask
impl From<Strength> for Score {
    fn from(s: Strength) -> Self {
        let category = s.value.category() << 21;
        let primary = (u8::from(s.value.primary()) as Score) << 17;
        let secondary = s.value.secondary().map_or(0, |r| u8::from(r) as Score) << 13;
        let kicks = u16::from(s.kicks) as Score;
        category | primary | secondary | kicks
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}
