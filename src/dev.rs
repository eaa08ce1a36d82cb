//! Development and self-test helpers.

use rand_core::{CryptoRng, Error as RngError, RngCore, SeedableRng};

/// Deterministic 64-bit linear congruential generator.
///
/// Drives the self-test suite (random key generation over every
/// registered curve) and examples. The output is fully predictable
/// from the seed: do **not** use it to key production signatures.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl SeedableRng for Lcg {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // Knuth's MMIX multiplier
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Only in the sense that the trait bound demands it; see the type-level
/// warning.
impl CryptoRng for Lcg {}
