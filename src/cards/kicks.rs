use super::rank::Rank;

/// A hand's kicker cards.
///
/// Stored as a 13-bit rank mask. Two masks with the same number of ranks
/// compare by their highest differing rank, which is exactly how kickers
/// break ties.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
///
/// [2c, Ts, Jc, Js, Jd, Jh]
/// xxx 0001100000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).into_iter().rev() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_kicker_wins() {
        let ak = Kickers::from(vec![Rank::Ace, Rank::King]);
        let aq = Kickers::from(vec![Rank::Ace, Rank::Queen]);
        assert!(ak > aq);
    }

    #[test]
    fn displays_high_to_low() {
        let kicks = Kickers::from(vec![Rank::Two, Rank::Ten, Rank::Jack]);
        assert_eq!(kicks.to_string(), "JT2");
    }
}
