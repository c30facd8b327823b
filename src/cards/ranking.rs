use super::rank::Rank;

/// A poker hand's category and the ranks that make it.
///
/// This does not include the hand's kicker cards. The derived ordering
/// compares category first, then the made ranks; kickers break what remains.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// ranks still eligible to kick
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::FourOAK(hi)
            | Ranking::Flush(hi) => !(u16::from(hi)),
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// position of the category, high card = 0 through straight flush = 8
    pub fn category(&self) -> u32 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(_, _) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(_, _) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }

    pub fn primary(&self) -> Rank {
        match *self {
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::TwoPair(r, _)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FullHouse(r, _)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => r,
        }
    }

    pub fn secondary(&self) -> Option<Rank> {
        match *self {
            Ranking::TwoPair(_, r) | Ranking::FullHouse(_, r) => Some(r),
            _ => None,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_house_beats_flush() {
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) > Ranking::Flush(Rank::Ace));
        assert!(Ranking::Flush(Rank::Seven) > Ranking::Straight(Rank::Ace));
    }

    #[test]
    fn categories_follow_ordering() {
        let ascending = [
            Ranking::HighCard(Rank::Ace),
            Ranking::OnePair(Rank::Two),
            Ranking::TwoPair(Rank::Three, Rank::Two),
            Ranking::ThreeOAK(Rank::Two),
            Ranking::Straight(Rank::Five),
            Ranking::Flush(Rank::Seven),
            Ranking::FullHouse(Rank::Two, Rank::Three),
            Ranking::FourOAK(Rank::Two),
            Ranking::StraightFlush(Rank::Five),
        ];
        for (i, ranking) in ascending.iter().enumerate() {
            assert_eq!(ranking.category(), i as u32);
        }
        assert!(ascending.windows(2).all(|w| w[0] < w[1]));
    }
}
