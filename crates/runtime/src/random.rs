//! Random sources backed by the `rand` crate.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use skirmish_core::RngOracle;

/// Adapter exposing any `rand` generator as an [`RngOracle`].
///
/// Backs unseeded runs. Seeded runs use the core `PcgRng`.
#[derive(Clone, Debug)]
pub struct StdRandom<R = StdRng> {
    rng: R,
}

impl StdRandom<StdRng> {
    /// Seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> StdRandom<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> RngOracle for StdRandom<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
