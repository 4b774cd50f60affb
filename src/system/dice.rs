//! Randomness source.

use rand::Rng;

/// Uniform random draws.
pub trait Dice: Send + Sync {
    /// Uniform integer in `[1, sides]`. `sides` of 0 is treated as 1.
    fn roll(&self, sides: u32) -> u32;

    /// Uniform index in `[0, len)`. `len` must be nonzero.
    fn pick(&self, len: usize) -> usize;
}

/// Backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDice;

impl Dice for ThreadDice {
    fn roll(&self, sides: u32) -> u32 {
        rand::thread_rng().gen_range(1..=sides.max(1))
    }

    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}
