use super::boards::BoardIterator;
use super::buffer::Buffer;
use super::matchup::Matchup;
use super::progress::Progress;
use super::record::Record;
use super::tally::Tally;
use crate::N_BOARDS;
use crate::SweepError;
use crate::cards::Hole;
use crate::catalog::Catalog;
use crate::showdown::Showdown;
use rayon::prelude::*;

/// boards between progress ticks
const BATCH: usize = 1 << 16;
/// progress lines per run
const CHECKPOINTS: usize = 20;

/// How catalog entries are scheduled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// one thread, one running offset across the whole buffer
    Sequential,
    /// one rayon task per catalog entry, each owning a disjoint slice
    #[default]
    Parallel,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Sequential => write!(f, "sequential"),
            Mode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Per-entry tallies, plus the dense buffer when it was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    tallies: Vec<Tally>,
    buffer: Option<Buffer>,
}

impl Report {
    /// in catalog order
    pub fn tallies(&self) -> &[Tally] {
        &self.tallies
    }
    pub fn total(&self) -> Tally {
        self.tallies.iter().copied().sum()
    }
    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }
}

impl From<Vec<Tally>> for Report {
    fn from(tallies: Vec<Tally>) -> Self {
        Self {
            tallies,
            buffer: None,
        }
    }
}

/// Exhaustive showdown enumeration of a catalog against one opponent.
///
/// Every catalog entry is a unit of work: build its residual deck, deal
/// all [`N_BOARDS`] boards in enumeration order, ask the oracle for each
/// showdown and tally. Both modes visit the same showdowns and produce
/// identical reports; only scheduling differs.
pub struct Sweep<'a, S: Showdown> {
    oracle: &'a S,
    matchups: Vec<Matchup>,
}

impl<'a, S: Showdown> Sweep<'a, S> {
    /// Seat every catalog entry against the opponent, failing on the first
    /// entry that shares a card with it.
    pub fn new(oracle: &'a S, catalog: &Catalog, opponent: Hole) -> Result<Self, SweepError> {
        let matchups = catalog
            .iter()
            .map(|&player| Matchup::try_from((player, opponent)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { oracle, matchups })
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    /// Showdowns this sweep will classify.
    pub fn size(&self) -> usize {
        self.matchups.len() * N_BOARDS
    }

    pub fn run(&self, mode: Mode, capture: bool) -> Result<Report, SweepError> {
        log::info!("{:<32}{:<32}", "sweeping", format!("{} x {} {}", self.matchups.len(), N_BOARDS, mode));
        let progress = Progress::new(self.size(), CHECKPOINTS);
        let report = match mode {
            Mode::Sequential => self.sequential(capture, &progress)?,
            Mode::Parallel => self.parallel(capture, &progress)?,
        };
        log::info!("{:<32}{:<32}", "swept", report.total());
        Ok(report)
    }

    fn sequential(&self, capture: bool, progress: &Progress) -> Result<Report, SweepError> {
        let mut buffer = capture.then(|| Buffer::new(self.matchups.len()));
        let mut tallies = Vec::with_capacity(self.matchups.len());
        let mut offset = 0;
        for (hand, matchup) in self.matchups.iter().enumerate() {
            let deck = matchup.deck();
            let mut tally = Tally::default();
            for board in BoardIterator::from(&deck) {
                let outcome = self.oracle.showdown(&matchup.table(board));
                tally.witness(outcome);
                if let Some(buffer) = buffer.as_mut() {
                    buffer.write(offset, Record::from((board, outcome)))?;
                }
                offset += 1;
                if offset % BATCH == 0 {
                    progress.tick(BATCH);
                }
            }
            check(hand, tally.total() as usize)?;
            log::debug!("{:<32}{:<32}", matchup, tally);
            tallies.push(tally);
        }
        progress.tick(offset % BATCH);
        if let Some(buffer) = buffer.as_ref() {
            buffer.verify()?;
        }
        Ok(Report { tallies, buffer })
    }

    fn parallel(&self, capture: bool, progress: &Progress) -> Result<Report, SweepError> {
        match capture {
            true => {
                let mut buffer = Buffer::new(self.matchups.len());
                let tallies = self
                    .matchups
                    .par_iter()
                    .zip(buffer.units())
                    .enumerate()
                    .map(|(hand, (matchup, slice))| self.unit(hand, matchup, Some(slice), progress))
                    .collect::<Result<Vec<_>, _>>()?;
                buffer.verify()?;
                Ok(Report {
                    tallies,
                    buffer: Some(buffer),
                })
            }
            false => {
                let tallies = self
                    .matchups
                    .par_iter()
                    .enumerate()
                    .map(|(hand, matchup)| self.unit(hand, matchup, None, progress))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Report {
                    tallies,
                    buffer: None,
                })
            }
        }
    }

    /// One catalog entry, writing into its own slice when capturing.
    fn unit(
        &self,
        hand: usize,
        matchup: &Matchup,
        mut slice: Option<&mut [Record]>,
        progress: &Progress,
    ) -> Result<Tally, SweepError> {
        let deck = matchup.deck();
        let mut tally = Tally::default();
        let mut written = 0;
        for (i, board) in BoardIterator::from(&deck).enumerate() {
            let outcome = self.oracle.showdown(&matchup.table(board));
            tally.witness(outcome);
            if let Some(slice) = slice.as_deref_mut() {
                let capacity = slice.len();
                let slot = slice.get_mut(i).ok_or(SweepError::Capacity {
                    offset: hand * N_BOARDS + i,
                    capacity: hand * N_BOARDS + capacity,
                })?;
                *slot = Record::from((board, outcome));
                written += 1;
            }
            if (i + 1) % BATCH == 0 {
                progress.tick(BATCH);
            }
        }
        progress.tick(tally.total() as usize % BATCH);
        check(hand, tally.total() as usize)?;
        if slice.is_some() {
            check(hand, written)?;
        }
        log::debug!("{:<32}{:<32}", matchup, tally);
        Ok(tally)
    }
}

/// A unit must account for every board of its entry.
fn check(hand: usize, written: usize) -> Result<(), SweepError> {
    match written {
        N_BOARDS => Ok(()),
        _ => Err(SweepError::Incomplete {
            hand,
            written,
            expected: N_BOARDS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Score;
    use crate::cards::Board;
    use crate::cards::Card;
    use crate::cards::Hand;
    use crate::game::Game;
    use crate::showdown::Outcome;
    use crate::showdown::Seat;
    use crate::showdown::Table;
    use crate::sweep::unrank;

    /// highest single card wins, board included
    struct HighCard;
    impl Showdown for HighCard {
        fn rank(&self, table: &Table, seat: Seat) -> Score {
            table.hand(seat)
                .map(|c| u8::from(c) as Score)
                .max()
                .unwrap_or_default()
        }
    }

    /// every showdown ties
    struct Flat;
    impl Showdown for Flat {
        fn rank(&self, _: &Table, _: Seat) -> Score {
            0
        }
    }

    fn opponent() -> Hole {
        Hole::try_from("Qd Td").unwrap()
    }

    #[test]
    fn aces_beat_queen_ten() {
        let game = Game::holdem();
        let catalog = Catalog::from(vec![Hole::try_from("Ah As").unwrap()]);
        let sweep = Sweep::new(&game, &catalog, opponent()).unwrap();
        let report = sweep.run(Mode::Parallel, false).unwrap();
        let tally = report.tallies()[0];
        assert!(tally.is_consistent());
        assert_eq!(tally.total(), 1_712_304);
        assert_eq!(tally.wins() + tally.losses() + tally.ties(), 1_712_304);
        assert!(tally.wins() > tally.losses());
    }

    #[test]
    fn modes_agree() {
        let catalog = Catalog::canonical().take(3);
        let sweep = Sweep::new(&HighCard, &catalog, opponent()).unwrap();
        let sequential = sweep.run(Mode::Sequential, true).unwrap();
        let parallel = sweep.run(Mode::Parallel, true).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.tallies().len(), 3);
        assert_eq!(sequential.total().total() as usize, 3 * N_BOARDS);
    }

    #[test]
    fn buffer_matches_tallies() {
        let catalog = Catalog::canonical().take(2);
        let sweep = Sweep::new(&HighCard, &catalog, opponent()).unwrap();
        let report = sweep.run(Mode::Parallel, true).unwrap();
        let buffer = report.buffer().unwrap();
        for (hand, tally) in report.tallies().iter().enumerate() {
            assert_eq!(buffer.tally(hand), *tally);
        }
        let matchup = sweep.matchups()[1];
        let deck = matchup.deck();
        let positions = unrank(777_777);
        let board = deck.board(&positions);
        let record = buffer.get(1, &positions).unwrap();
        assert_eq!(record.board(), Some(board));
        assert_eq!(record.outcome(), Some(HighCard.showdown(&matchup.table(board))));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let catalog = Catalog::canonical().take(2);
        let sweep = Sweep::new(&HighCard, &catalog, opponent()).unwrap();
        let a = sweep.run(Mode::Parallel, true).unwrap();
        let b = sweep.run(Mode::Parallel, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn uncaptured_runs_report_the_same_tallies() {
        let catalog = Catalog::canonical().take(2);
        let sweep = Sweep::new(&HighCard, &catalog, opponent()).unwrap();
        let captured = sweep.run(Mode::Sequential, true).unwrap();
        let counted = sweep.run(Mode::Sequential, false).unwrap();
        assert_eq!(captured.tallies(), counted.tallies());
        assert!(counted.buffer().is_none());
    }

    #[test]
    fn overlapping_opponent_fails_up_front() {
        let catalog = Catalog::canonical();
        let err = Sweep::new(&HighCard, &catalog, Hole::try_from("Ah Kd").unwrap())
            .err()
            .unwrap();
        assert!(matches!(err, SweepError::Overlap(c) if c == Card::try_from("Ah").unwrap()));
    }

    #[test]
    fn every_catalog_deck_excludes_exactly_its_holes() {
        let catalog = Catalog::canonical();
        let sweep = Sweep::new(&Flat, &catalog, opponent()).unwrap();
        assert_eq!(sweep.matchups().len(), crate::N_HANDS);
        for matchup in sweep.matchups() {
            let deck = Hand::from(matchup.deck());
            let dead = matchup.dead();
            assert_eq!(matchup.deck().len(), crate::N_RESIDUAL);
            assert_eq!(dead.size(), crate::N_DEAD);
            assert_eq!(Hand::intersect(deck, dead), Hand::empty());
            assert_eq!(u64::from(Hand::add(deck, dead)), Hand::mask());
        }
    }

    #[test]
    fn ties_are_not_wins() {
        let catalog = Catalog::canonical().take(1);
        let report = Sweep::new(&Flat, &catalog, opponent())
            .unwrap()
            .run(Mode::Sequential, false)
            .unwrap();
        assert_eq!(report.total().ties() as usize, N_BOARDS);
        assert_eq!(report.total().wins(), 0);
        let board = Board::try_from("2c 3c 4c 5c 7d").unwrap();
        let table = Table::new(Hole::try_from("Ah As").unwrap(), opponent(), board);
        assert_eq!(Flat.showdown(&table), Outcome::Tie);
    }

    #[test]
    #[ignore]
    fn full_catalog() {
        let game = Game::holdem();
        let catalog = Catalog::canonical();
        let report = Sweep::new(&game, &catalog, opponent())
            .unwrap()
            .run(Mode::Parallel, false)
            .unwrap();
        assert!(report.tallies().iter().all(Tally::is_consistent));
        assert_eq!(report.total().total(), 289_379_376);
        assert!(report.total().is_consistent());
    }
}
