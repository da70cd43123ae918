//! Seedable randomness for prompt draws and chaos cues.
//!
//! The same seed always yields the same show, which is what scripted runs
//! and tests rely on.
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct ShowRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ShowRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream derived from this seed and `context`.
    ///
    /// Prompt draws and chaos cues use separate streams so that toggling
    /// chaos never changes which prompts a seeded session picks.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(
            self.seed
                .wrapping_add(context_key(context).wrapping_mul(0x9E3779B97F4A7C15)),
        )
    }
}

/// FNV-1a over the context name. Fixed so child seeds never change between
/// builds.
fn context_key(context: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    context
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}

impl RngCore for ShowRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ShowRng::new(42);
        let mut b = ShowRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn contexts_are_stable_and_distinct() {
        let base = ShowRng::new(7);
        assert_eq!(base.for_context("chaos").seed(), base.for_context("chaos").seed());
        assert_ne!(base.for_context("chaos").seed(), base.for_context("prompts").seed());
    }

    #[test]
    fn context_seeds_are_pinned() {
        let base = ShowRng::new(7);
        assert_eq!(base.for_context("chaos").seed(), 15_966_332_388_477_423_826);
        assert_eq!(base.for_context("prompts").seed(), 13_318_183_885_722_865_279);
    }
}
