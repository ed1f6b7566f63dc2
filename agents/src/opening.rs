use isolation_core::Move;
use rand::seq::SliceRandom;
use rand::Rng;

/// Central cells, tried first.
pub const BEST_OPENINGS: [Move; 4] = [
    Move::new(2, 3),
    Move::new(3, 4),
    Move::new(4, 3),
    Move::new(3, 2),
];

/// The 3x3 block around the centre, row-major.
pub const SECOND_OPENINGS: [Move; 9] = [
    Move::new(2, 2),
    Move::new(2, 3),
    Move::new(2, 4),
    Move::new(3, 2),
    Move::new(3, 3),
    Move::new(3, 4),
    Move::new(4, 2),
    Move::new(4, 3),
    Move::new(4, 4),
];

/// Last ply at which the book is used instead of search.
pub const BOOK_LAST_PLY: u32 = 1;

/// Ranked placement preferences for the first two plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningBook {
    best: &'static [Move],
    second: &'static [Move],
}

impl OpeningBook {
    pub const fn new(best: &'static [Move], second: &'static [Move]) -> Self {
        Self { best, second }
    }

    /// Returns true if the book should answer at this ply.
    pub const fn applies(&self, ply: u32) -> bool {
        ply <= BOOK_LAST_PLY
    }

    /// First book move present in `legal_moves`, searching the best list and
    /// then the second list in rank order. The order of `legal_moves` does
    /// not matter.
    pub fn lookup(&self, legal_moves: &[Move]) -> Option<Move> {
        self.best
            .iter()
            .chain(self.second.iter())
            .find(|mv| legal_moves.contains(mv))
            .copied()
    }

    /// Book move, or a uniformly random legal move when the book has none.
    /// Returns `Move::NONE` when there are no legal moves at all.
    pub fn choose<R: Rng + ?Sized>(&self, legal_moves: &[Move], rng: &mut R) -> Move {
        self.lookup(legal_moves)
            .or_else(|| legal_moves.choose(rng).copied())
            .unwrap_or(Move::NONE)
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new(&BEST_OPENINGS, &SECOND_OPENINGS)
    }
}
