//! Probabilistic primality testing.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::math::modpow;

/// Miller–Rabin round count used by the rest of the crate.
///
/// A composite survives a single round with probability at most 1/4, so the
/// overall false-positive probability is bounded by `4^-40`. Weaker counts
/// seen in older RSA demos (10 rounds) are deliberately not offered as a
/// default.
pub const MILLER_RABIN_ROUNDS: usize = 40;

/// Reports whether `n` passes `rounds` rounds of the Miller–Rabin test with
/// uniformly chosen witnesses in `[2, n-2]`.
///
/// `n <= 1` and even `n > 2` are rejected outright; 2 and 3 are accepted.
/// The probability of accepting a composite is at most `4^-rounds`; callers
/// needing stronger assurance choose `rounds` accordingly (see
/// [`MILLER_RABIN_ROUNDS`]).
///
/// Each witness is an independent trial, and the first witness that proves
/// compositeness short-circuits the remaining rounds.
pub fn probably_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    let one = BigUint::one();
    let two = &one + &one;
    let three = &two + &one;

    if n <= &one {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 = 2^s · d with d odd.
    let nm1 = n - &one;
    let s = nm1
        .trailing_zeros()
        .expect("n-1 is nonzero for odd n > 3");
    let d = &nm1 >> s;

    // Witnesses are drawn from [2, n-2]; n >= 5 here, so the range is
    // never empty.
    let nm3 = n - &three;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_below(&nm3) + &two;

        let mut x = modpow(&a, &d, n);
        if x.is_one() || x == nm1 {
            continue 'witness;
        }

        for _ in 1..s {
            x = &x * &x % n;
            if x == nm1 {
                continue 'witness;
            }
            if x.is_one() {
                // A nontrivial square root of 1 certifies compositeness.
                return false;
            }
        }

        return false;
    }

    true
}
