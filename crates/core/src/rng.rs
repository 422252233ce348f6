//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm used in modern Tetris.
//! Each bag contains one of each piece (I, J, L, O, S, T, Z), shuffled.
//! Draws from the bag until empty, then generates a new bag.
//!
//! Seeded construction gives a reproducible sequence for tests and replays
//! within one run.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Randomizer {
    /// Remaining pieces of the current bag, front first
    bag: ArrayVec<PieceKind, 7>,
    /// Position of the front of `bag`
    bag_index: usize,
    rng: StdRng,
}

impl Randomizer {
    /// Create a deterministic randomizer
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a randomizer seeded from the OS
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            bag: ArrayVec::new(),
            bag_index: 0,
            rng,
        }
    }

    /// Generate a new shuffled bag (Fisher-Yates)
    fn refill_bag(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Draw the next piece, refilling the bag first when it is empty
    pub fn next_type(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Throw away the rest of the current bag; the next draw starts a fresh one
    pub fn discard_bag(&mut self) {
        self.bag.clear();
        self.bag_index = 0;
    }

    /// Pieces left in the current bag, in draw order
    pub fn bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Iterator for Randomizer {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.next_type())
    }
}
