//! Degenerate RNGs for exercising sampling failure paths in tests.

use rand_core::{CryptoRng, Error, RngCore};

/// An RNG that emits the same byte forever.
///
/// Every sampling loop sees the same candidate on each attempt, which makes
/// the bounded rejection loops exhaust deterministically.
pub(crate) struct ConstRng(pub(crate) u8);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_ne_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_ne_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ConstRng {}
