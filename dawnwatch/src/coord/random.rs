//! Injectable random number source.
//!
//! The generator draws coordinate components through this trait so tests can
//! script exact coordinate sequences instead of depending on a thread-local
//! RNG.

use rand::Rng;

/// Source of uniformly distributed floating-point values.
pub trait RandomSource {
    /// Returns a value drawn uniformly from `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

/// Production random source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        rand::rng().random_range(min..max)
    }
}
