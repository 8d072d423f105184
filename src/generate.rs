//! Generation of the key-pair components.

use alloc::vec::Vec;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};
use crate::math::mod_inverse;
use crate::prime_rand::RandPrime;

/// Resampling attempts allowed for drawing a `q` distinct from `p`.
///
/// A collision requires sampling the same prime twice, so this bound only
/// triggers for degenerate bit-widths where few primes exist.
const DISTINCT_PRIME_ATTEMPTS: usize = 32;

/// Draws allowed in the search for a public exponent coprime to the totient.
const COPRIME_ATTEMPTS: usize = 256;

pub(crate) struct KeyComponents {
    pub(crate) n: BigUint,
    pub(crate) e: BigUint,
    pub(crate) d: BigUint,
    pub(crate) primes: Vec<BigUint>,
}

/// Generates the components of a two-prime key from `bit_size`-bit primes.
///
/// Every sampling loop is bounded; exceeding a bound surfaces as an error
/// and discards all work done for this call. No partial component set is
/// ever returned.
pub(crate) fn generate_key_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<KeyComponents> {
    let p = rng.gen_prime(bit_size)?;

    let mut q = rng.gen_prime(bit_size)?;
    let mut attempts = 0;
    while q == p {
        attempts += 1;
        if attempts >= DISTINCT_PRIME_ATTEMPTS {
            return Err(Error::DegenerateKey);
        }
        q = rng.gen_prime(bit_size)?;
    }

    let n = &p * &q;
    let one = BigUint::one();
    // Wiped on drop, including the early-return paths below.
    let phi = Zeroizing::new((&p - &one) * (&q - &one));

    let e = sample_coprime_exponent(rng, &phi)?;

    // gcd(e, phi) = 1 at this point, so an inverse exists.
    let d = mod_inverse(&e, &phi)?;

    Ok(KeyComponents {
        n,
        e,
        d,
        primes: vec![p, q],
    })
}

/// Draws uniform candidates from `[2, phi)` until one is coprime to `phi`.
///
/// Should succeed almost immediately for primes of reasonable size, but the
/// search is bounded rather than open-ended; exhaustion (or a totient too
/// small to admit any candidate) is [`Error::NoCoprimeFound`].
fn sample_coprime_exponent<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    phi: &BigUint,
) -> Result<BigUint> {
    let two = BigUint::one() + BigUint::one();
    if phi <= &two {
        // [2, phi) is empty, e.g. for p = 2, q = 3.
        return Err(Error::NoCoprimeFound);
    }

    let span = phi - &two;
    for _ in 0..COPRIME_ATTEMPTS {
        let e = rng.gen_biguint_below(&span) + &two;
        if e.gcd(phi).is_one() {
            return Ok(e);
        }
    }

    Err(Error::NoCoprimeFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_rng::ConstRng;
    use num_traits::FromPrimitive;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn test_components_invariants() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let one = BigUint::one();

        for _ in 0..10 {
            let c = generate_key_components(&mut rng, 24).unwrap();
            let [p, q] = [&c.primes[0], &c.primes[1]];

            assert_ne!(p, q);
            assert_eq!(c.n, p * q);

            let phi = (p - &one) * (q - &one);
            assert!(&c.e >= &(&one + &one));
            assert!(c.e < phi);
            assert!(c.e.gcd(&phi).is_one());
            assert!((&c.d * &c.e % &phi).is_one());
        }
    }

    #[test]
    fn test_exponent_search_rejects_tiny_totient() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let phi = BigUint::from_u64(2).unwrap();
        assert_eq!(
            sample_coprime_exponent(&mut rng, &phi),
            Err(Error::NoCoprimeFound)
        );
    }

    #[test]
    fn test_identical_primes_exhaust_resampling() {
        // A constant RNG makes every 8-bit draw the prime 131, so p and q
        // can never become distinct and the bounded loop must give up.
        let mut rng = ConstRng(3);
        assert_eq!(
            generate_key_components(&mut rng, 8).err(),
            Some(Error::DegenerateKey)
        );
    }

    #[test]
    fn test_exponent_search_exhausts_on_stuck_rng() {
        // Every draw from ConstRng(0) is e = 2, and gcd(2, 8) != 1, so the
        // bounded search must fail rather than spin.
        let mut rng = ConstRng(0);
        let phi = BigUint::from_u64(8).unwrap();
        assert_eq!(
            sample_coprime_exponent(&mut rng, &phi),
            Err(Error::NoCoprimeFound)
        );
    }

    #[test]
    fn test_invalid_bit_width_propagates() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        assert_eq!(
            generate_key_components(&mut rng, 0).err(),
            Some(Error::InvalidBitWidth)
        );
        assert_eq!(
            generate_key_components(&mut rng, 1).err(),
            Some(Error::InvalidBitWidth)
        );
    }
}
