//! Bag module - 7-bag random piece generation.
//!
//! Implements the "7-bag" algorithm: each bag holds one of every kind,
//! freshly shuffled, and is dispensed to exhaustion before the next refill.
//! Every window of 7 draws aligned to a bag boundary is a permutation of the
//! 7 kinds; nothing is guaranteed about adjacency across bag boundaries.
//!
//! Randomness comes from a small seeded LCG so sequences are reproducible.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid the all-zero fixed point.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state, usable as a seed for a follow-up generator.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator.
#[derive(Debug, Clone)]
pub struct SevenBag {
    /// Remaining pieces of the current bag, dispensed from the back.
    bag: ArrayVec<PieceKind, 7>,
    rng: SimpleRng,
}

impl SevenBag {
    /// Create a generator with the given seed. The bag starts empty and is
    /// filled lazily on the first draw.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece, refilling with a fresh shuffled bag when empty.
    pub fn next(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        // Refill guarantees at least one element.
        self.bag.pop().unwrap_or(PieceKind::I)
    }

    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.rng.shuffle(&mut self.bag);
    }

    /// Number of pieces left before the next refill.
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Current RNG state (for reseeding a follow-up session).
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}
