//! Injectable source of random picks for the computer strategies.
//!
//! Any `rand::Rng` is a `RandomChoice`, so a seeded `StdRng` gives
//! reproducible games and tests can substitute a scripted picker.

use rand::Rng;

pub trait RandomChoice {
    /// Uniform index in `0..len`, or `None` when `len == 0`.
    fn choose_index(&mut self, len: usize) -> Option<usize>;
}

impl<R: Rng> RandomChoice for R {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.random_range(0..len))
    }
}

/// Always picks the same position, clamped to the available range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChoice(pub usize);

impl RandomChoice for FixedChoice {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.min(len - 1))
    }
}
