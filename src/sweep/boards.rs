use crate::N_BOARD;
use crate::N_BOARDS;
use crate::N_RESIDUAL;
use crate::cards::Board;
use crate::cards::Deck;
use crate::choose;

/// Ascending position tuples `f1 < f2 < f3 < t < r` over the residual deck.
///
/// Tuples come out in nested-loop order: the last position moves fastest
/// and the first slowest, so the n-th item (counting from zero) is the
/// tuple whose [`rank`] is n. The first is `[0, 1, 2, 3, 4]` and the last
/// is `[43, 44, 45, 46, 47]`.
#[derive(Debug, Clone)]
pub struct Positions {
    next: Option<[usize; N_BOARD]>,
    index: usize,
}

impl Positions {
    /// Resume the walk at a given combination index.
    pub fn from_index(index: usize) -> Self {
        Self {
            next: (index < N_BOARDS).then(|| unrank(index)),
            index,
        }
    }
    /// index of the next tuple to be yielded
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for Positions {
    fn default() -> Self {
        Self::from_index(0)
    }
}

impl Iterator for Positions {
    type Item = [usize; N_BOARD];
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = successor(current);
        self.index += 1;
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = N_BOARDS.saturating_sub(self.index);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Positions {}

/// Lexicographic successor: bump the rightmost position that still has
/// room, then pack everything after it tight against it.
fn successor(mut positions: [usize; N_BOARD]) -> Option<[usize; N_BOARD]> {
    let i = (0..N_BOARD)
        .rev()
        .find(|&i| positions[i] < N_RESIDUAL - N_BOARD + i)?;
    positions[i] += 1;
    for j in i + 1..N_BOARD {
        positions[j] = positions[j - 1] + 1;
    }
    Some(positions)
}

/// Combination index of an ascending position tuple.
pub fn rank(positions: &[usize; N_BOARD]) -> usize {
    debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(positions[N_BOARD - 1] < N_RESIDUAL);
    positions
        .iter()
        .enumerate()
        .map(|(i, &p)| choose(N_RESIDUAL - 1 - p, N_BOARD - i))
        .fold(N_BOARDS - 1, |rank, x| rank - x)
}

/// Ascending position tuple at a combination index.
pub fn unrank(index: usize) -> [usize; N_BOARD] {
    assert!(index < N_BOARDS, "combination index {} out of range", index);
    let mut remainder = N_BOARDS - 1 - index;
    let mut positions = [0; N_BOARD];
    let mut x = N_RESIDUAL;
    for (i, position) in positions.iter_mut().enumerate() {
        let k = N_BOARD - i;
        x -= 1;
        while choose(x, k) > remainder {
            x -= 1;
        }
        remainder -= choose(x, k);
        *position = N_RESIDUAL - 1 - x;
    }
    positions
}

/// Every board dealt from a residual deck, in [`Positions`] order.
#[derive(Debug, Clone)]
pub struct BoardIterator<'a> {
    deck: &'a Deck,
    positions: Positions,
}

impl<'a> From<&'a Deck> for BoardIterator<'a> {
    fn from(deck: &'a Deck) -> Self {
        Self {
            deck,
            positions: Positions::default(),
        }
    }
}

impl Iterator for BoardIterator<'_> {
    type Item = Board;
    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(|p| self.deck.board(&p))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for BoardIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    #[test]
    fn visits_every_combination_once() {
        let mut count = 0;
        let mut last = None::<[usize; N_BOARD]>;
        for positions in Positions::default() {
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert!(last.map_or(true, |last| last < positions));
            last = Some(positions);
            count += 1;
        }
        assert_eq!(count, N_BOARDS);
        assert_eq!(count, 1_712_304);
    }

    #[test]
    fn counter_is_rank() {
        for (i, positions) in Positions::default().enumerate() {
            assert_eq!(rank(&positions), i);
        }
    }

    #[test]
    fn unrank_inverts_rank() {
        for i in (0..N_BOARDS).step_by(997).chain([N_BOARDS - 1]) {
            assert_eq!(rank(&unrank(i)), i);
        }
        assert_eq!(unrank(0), [0, 1, 2, 3, 4]);
        assert_eq!(unrank(1), [0, 1, 2, 3, 5]);
        assert_eq!(unrank(N_BOARDS - 1), [43, 44, 45, 46, 47]);
    }

    #[test]
    fn resume_mid_walk() {
        let mut walk = Positions::from_index(1000);
        assert_eq!(walk.len(), N_BOARDS - 1000);
        assert_eq!(walk.next(), Some(unrank(1000)));
        assert_eq!(walk.index(), 1001);
        assert_eq!(Positions::from_index(N_BOARDS).next(), None);
    }

    #[test]
    fn boundary_boards() {
        let dead = Hand::try_from("Ah As Qd Td").unwrap();
        let deck = Deck::from(dead);
        let mut boards = BoardIterator::from(&deck);
        assert_eq!(boards.len(), N_BOARDS);
        let first = boards.next().unwrap();
        let last = boards.last().unwrap();
        assert_eq!(first, Board::try_from("2c 2d 2h 2s 3c").unwrap());
        assert_eq!(last, Board::try_from("Kd Kh Ks Ac Ad").unwrap());
        assert_eq!(first.cards(), &deck.cards()[..N_BOARD]);
        assert_eq!(last.cards(), &deck.cards()[N_RESIDUAL - N_BOARD..]);
        assert_eq!(Hand::intersect(Hand::from(last), dead), Hand::empty());
        assert_eq!(Hand::intersect(Hand::from(first), dead), Hand::empty());
    }
}
