//! Deterministic RNG helpers.
//!
//! Small and dependency-free. It is **not** cryptographic. Simulations take a
//! `DeterministicRng` handle instead of reaching for a global generator, so a
//! run is fully reproducible from its seed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Uniform integer in `0..bound`.
    ///
    /// Uses Lemire's multiply-shift with rejection, so the result carries no modulo bias.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be > 0");
        let mut m = u64::from(self.next_u32()) * u64::from(bound);
        let mut low = m as u32;
        if low < bound {
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                m = u64::from(self.next_u32()) * u64::from(bound);
                low = m as u32;
            }
        }
        (m >> 32) as u32
    }

    /// Pick one element uniformly. Returns `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
        items.get(self.next_below(len) as usize)
    }
}

impl<R: DeterministicRng + ?Sized> DeterministicRng for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// SplitMix64: good seeding RNG and small deterministic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.step()
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Seed for one independent run out of a batch.
///
/// `run` is the run index within the batch and `stream` separates unrelated consumers
/// drawing from the same run.
pub fn derive_seed(global_seed: u64, run: u64, stream: u64) -> u64 {
    let x = global_seed ^ mix64(run.wrapping_add(0x9E3779B97F4A7C15)) ^ mix64(stream);
    mix64(x)
}
