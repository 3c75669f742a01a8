//! Injectable uniform random source
//!
//! Draws and shuffles only ever ask for a uniform value in `[0, 1)`, so any
//! `rand::Rng` works. Tests pass a seeded `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform `[0, 1)` source
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`, computed as `floor(u * len)`.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index called with empty range");
        let index = (self.next_unit() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Build the session random source, seeded when reproducibility is wanted
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
