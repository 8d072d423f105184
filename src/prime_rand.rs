//! Generation of random primes by rejection sampling.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};
use crate::prime::{probably_prime, MILLER_RABIN_ROUNDS};

/// Sampling attempts allowed per requested bit of width.
///
/// By the prime number theorem roughly one in `0.69·b` uniform draws of a
/// `b`-bit integer is prime, so a budget of `64·b` attempts fails with
/// vanishing probability against a working random source while still
/// terminating against a broken one.
const ATTEMPTS_PER_BIT: usize = 64;

/// A generic trait for generating random primes.
///
/// *Warning*: the quality of the result is entirely dependent on the
/// provided random number generator.
///
/// # Example
/// ```
/// use rand_chacha::ChaCha8Rng;
/// use rand_core::SeedableRng;
/// use textbook_rsa::RandPrime;
///
/// let mut rng = ChaCha8Rng::from_seed([42; 32]);
/// let p = rng.gen_prime(24).unwrap();
/// assert_eq!(p.bits(), 24);
/// ```
pub trait RandPrime {
    /// Generates a random prime of exactly `bit_size` bits.
    ///
    /// Candidates are drawn uniformly from `[2^(bit_size-1), 2^bit_size - 1]`
    /// and rejected until one passes [`probably_prime`] at
    /// [`MILLER_RABIN_ROUNDS`] rounds. Returns [`Error::InvalidBitWidth`]
    /// for `bit_size < 2` and [`Error::PrimeGenerationTimeout`] if the
    /// attempt budget is exhausted.
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint>;
}

impl<R: CryptoRngCore + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint> {
        if bit_size < 2 {
            return Err(Error::InvalidBitWidth);
        }

        // [floor, 2·floor) is exactly the set of bit_size-bit integers.
        let floor = BigUint::one() << (bit_size - 1);

        for _ in 0..ATTEMPTS_PER_BIT.saturating_mul(bit_size) {
            let candidate = self.gen_biguint_below(&floor) + &floor;
            if probably_prime(self, &candidate, MILLER_RABIN_ROUNDS) {
                return Ok(candidate);
            }
        }

        Err(Error::PrimeGenerationTimeout)
    }
}
