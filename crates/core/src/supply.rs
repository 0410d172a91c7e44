//! Piece supply module - 7-bag random piece generation
//!
//! A bag holds one of each shape. Draws remove a uniformly random entry until
//! the bag is empty, then it is refilled. No shape can be skipped for more than
//! one full bag, so the longest drought for any shape is bounded.
//!
//! Every drawn shape is also given 0-3 random clockwise rotations before it is
//! handed out. The RNG is injected so tests can seed it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tetrimino::{PieceId, Tetrimino};
use crate::types::ShapeKind;

/// Anything that can hand the game its next piece
pub trait PieceSource {
    fn next_piece(&mut self) -> Tetrimino;
}

impl<F> PieceSource for F
where
    F: FnMut() -> Tetrimino,
{
    fn next_piece(&mut self) -> Tetrimino {
        self()
    }
}

/// Draw-without-replacement container
#[derive(Debug, Clone)]
pub struct RandomBag<T> {
    items: Vec<T>,
}

impl<T> RandomBag<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Remove and return a uniformly chosen item, `None` once exhausted
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.items.len());
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn full_bag() -> RandomBag<ShapeKind> {
    RandomBag::new(ShapeKind::ALL.to_vec())
}

/// Bag-based piece generator
#[derive(Debug, Clone)]
pub struct PieceSupply<R = StdRng> {
    bag: RandomBag<ShapeKind>,
    rng: R,
    last_id: u64,
}

impl PieceSupply<StdRng> {
    /// Deterministic supply for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> PieceSupply<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            bag: full_bag(),
            rng,
            last_id: 0,
        }
    }

    /// Draw the next shape, refilling the bag first if it ran dry
    pub fn next_shape(&mut self) -> ShapeKind {
        if let Some(kind) = self.bag.next(&mut self.rng) {
            return kind;
        }
        self.bag = full_bag();
        // A freshly filled bag always has seven entries.
        self.bag.next(&mut self.rng).unwrap_or(ShapeKind::I)
    }

    /// Shapes left before the next refill
    pub fn remaining_in_bag(&self) -> usize {
        self.bag.len()
    }

    /// Draw a shape, rotate it 0-3 times and stamp a fresh identity on it
    pub fn draw(&mut self) -> Tetrimino {
        let kind = self.next_shape();
        let turns: u8 = self.rng.gen_range(0..4);
        self.last_id += 1;
        (0..turns)
            .fold(Tetrimino::of(kind), |piece, _| piece.clockwise())
            .with_id(PieceId(self.last_id))
    }
}

impl<R: Rng> PieceSource for PieceSupply<R> {
    fn next_piece(&mut self) -> Tetrimino {
        self.draw()
    }
}
