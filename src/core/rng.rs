//! Deterministic random number generation for tile spawns.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed and call sequence produce identical output
//! - **Explicit state**: The whole generator is one `u32`, stored in
//!   `GameState::rng_state` and threaded through every move
//! - **Copyable**: Copy a `GameRng` to branch or preview without touching
//!   the original
//!
//! The step is a 32-bit linear congruential generator
//! (`a = 1664525`, `c = 1013904223`, `m = 2^32`). Floats are the new state
//! divided by `2^32`, so every draw lies in `[0, 1)`.
//!
//! ```
//! use numberclart::core::GameRng;
//!
//! let mut rng = GameRng::new(2);
//! let mut preview = rng; // copies the state
//!
//! assert_eq!(rng.next_f64(), preview.next_f64());
//! assert_eq!(rng.state(), 1_017_233_273);
//! ```

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Linear congruential generator over an explicit 32-bit state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a generator positioned at `state`.
    #[must_use]
    pub const fn new(state: u32) -> Self {
        Self { state }
    }

    /// One LCG step as a pure function of the state.
    #[must_use]
    pub const fn step(state: u32) -> u32 {
        state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
    }

    /// Current state, suitable for storing back into `GameState`.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advance once and return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = Self::step(self.state);
        f64::from(self.state) / TWO_POW_32
    }

    /// Advance once and return an index in `[0, n)`.
    ///
    /// Computed as `floor(next_f64() * n)`, not by modulo. Replays depend on
    /// this exact mapping.
    pub fn gen_index(&mut self, n: usize) -> usize {
        let value = self.next_f64();
        (value * n as f64).floor() as usize
    }

    /// Choose an index with weighted probability.
    ///
    /// Draws exactly one float. Weights do not need to sum to 1.0. The
    /// threshold walk stops at the first index where it drops strictly
    /// below zero; the last index covers floating-point leftovers.
    ///
    /// Returns `None` (without advancing) if `weights` is empty.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total = weights.iter().fold(0.0, |sum, w| sum + w);
        let mut threshold = self.next_f64() * total;

        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold < 0.0 {
                return Some(i);
            }
        }

        // Floating point edge case
        Some(weights.len() - 1)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(super::state::DEFAULT_SEED)
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GameRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
