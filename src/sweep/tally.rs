use crate::Equity;
use crate::showdown::Outcome;

/// Win, loss and tie counts for some set of showdowns.
///
/// `total` is counted on its own; [`Tally::is_consistent`] checks it
/// against the outcome counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    wins: u64,
    losses: u64,
    ties: u64,
    total: u64,
}

impl Tally {
    pub fn witness(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.total += 1;
    }
    pub fn wins(&self) -> u64 {
        self.wins
    }
    pub fn losses(&self) -> u64 {
        self.losses
    }
    pub fn ties(&self) -> u64 {
        self.ties
    }
    pub fn total(&self) -> u64 {
        self.total
    }
    pub fn is_consistent(&self) -> bool {
        self.wins + self.losses + self.ties == self.total
    }
    /// ties split the pot
    pub fn equity(&self) -> Equity {
        match self.total {
            0 => 0.,
            n => (self.wins as Equity + self.ties as Equity / 2.) / n as Equity,
        }
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(outcomes: I) -> Self {
        let mut tally = Self::default();
        outcomes.into_iter().for_each(|o| tally.witness(o));
        tally
    }
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
        self.total += other.total;
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "W {:>10}  L {:>10}  T {:>10}  {:>6.2}%",
            self.wins,
            self.losses,
            self.ties,
            self.equity() * 100.
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_equity() {
        let tally = [Outcome::Win, Outcome::Win, Outcome::Tie, Outcome::Lose]
            .into_iter()
            .collect::<Tally>();
        assert_eq!(tally.wins(), 2);
        assert_eq!(tally.total(), 4);
        assert!(tally.is_consistent());
        assert_eq!(tally.equity(), 0.625);
        assert_eq!(Tally::default().equity(), 0.);
    }

    #[test]
    fn sums_partials() {
        let a = [Outcome::Win, Outcome::Lose].into_iter().collect::<Tally>();
        let b = [Outcome::Tie].into_iter().collect::<Tally>();
        let total = [a, b].into_iter().sum::<Tally>();
        assert_eq!(total.ties(), 1);
        assert_eq!(total.total(), 3);
        assert_eq!(total, a + b);
    }
}
