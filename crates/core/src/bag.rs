//! Bag randomizer - shuffle-without-replacement piece generation
//!
//! Each bag holds one of every piece kind in a uniformly random order
//! (Fisher-Yates via `rand`). Pieces are drawn until the bag is empty, and
//! only then is it refilled and reshuffled, so every run of
//! [`PieceKind::COUNT`] draws aligned to a refill is a permutation.
//!
//! A seeded [`StdRng`] gives fully reproducible games.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Number of pieces in one bag cycle
pub const BAG_SIZE: usize = PieceKind::COUNT;

/// Bag-of-seven piece generator
#[derive(Debug, Clone)]
pub struct Bag<R = StdRng> {
    /// Remaining pieces of the current cycle; drawn from the end
    pieces: ArrayVec<PieceKind, BAG_SIZE>,
    rng: R,
}

impl Bag<StdRng> {
    /// Create a reproducible bag from a seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a bag seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> Bag<R> {
    /// Create a bag over any RNG; the first draw fills it
    pub fn with_rng(rng: R) -> Self {
        Self {
            pieces: ArrayVec::new(),
            rng,
        }
    }

    /// Refill with one of each kind, shuffle, and draw the first piece of the new cycle
    fn refill_and_draw(&mut self) -> PieceKind {
        let mut fresh = PieceKind::ALL;
        fresh.shuffle(&mut self.rng);
        self.pieces.clear();
        self.pieces.extend(fresh[..BAG_SIZE - 1].iter().copied());
        fresh[BAG_SIZE - 1]
    }

    /// Draw the next piece, refilling first if the bag is empty
    pub fn draw(&mut self) -> PieceKind {
        match self.pieces.pop() {
            Some(kind) => kind,
            None => self.refill_and_draw(),
        }
    }

    /// Next piece that [`draw`](Self::draw) will return, if the current cycle still has one
    pub fn peek(&self) -> Option<PieceKind> {
        self.pieces.last().copied()
    }

    /// Pieces left in the current cycle, in draw order
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pieces.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
