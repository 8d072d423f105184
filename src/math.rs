//! Modular arithmetic primitives: binary exponentiation and the iterative
//! extended Euclidean algorithm.
//!
//! Everything else in the crate bottoms out here; neither function draws
//! randomness or keeps state between calls.

use num_bigint::{BigInt, BigUint, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::{Error, Result};

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// The running value is reduced after every multiplication, so intermediate
/// magnitudes stay below `modulus²`. `exponent = 0` yields `1` (including for
/// `base = 0`), and `modulus = 1` yields `0`.
///
/// `modulus` must be nonzero.
pub fn modpow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = &result * &base % modulus;
        }
        exponent >>= 1;
        base = &base * &base % modulus;
    }

    result
}

/// Computes the multiplicative inverse of `a` modulo `modulus`, normalized
/// into `[0, modulus)`.
///
/// Runs the extended Euclidean algorithm iteratively, carrying the Bézout
/// coefficient for `a` through the remainder steps. Returns
/// [`Error::NoInverse`] when `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::NoInverse);
    }

    let m = modulus
        .to_bigint()
        .expect("unsigned to signed conversion is infallible");

    // Invariant: r0 = t0·a (mod m) and r1 = t1·a (mod m).
    let mut r0 = m.clone();
    let mut r1 = a
        .to_bigint()
        .expect("unsigned to signed conversion is infallible");
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let q = &r0 / &r1;

        let r2 = &r0 - &q * &r1;
        r0 = core::mem::replace(&mut r1, r2);

        let t2 = &t0 - &q * &t1;
        t0 = core::mem::replace(&mut t1, t2);
    }

    if !r0.is_one() {
        return Err(Error::NoInverse);
    }

    let mut d = t0 % &m;
    if d.is_negative() {
        d += &m;
    }

    Ok(d.to_biguint()
        .expect("normalized coefficient is non-negative"))
}
