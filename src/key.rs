//! RSA key types.

use alloc::vec::Vec;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Error, Result};
use crate::generate::generate_key_components;
use crate::math::mod_inverse;

/// Components of the public half of an RSA key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bits.
    fn bits(&self) -> usize {
        self.n().bits()
    }
}

/// Components of the private half of an RSA key.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Returns the private exponent of the key.
    fn d(&self) -> &BigUint;

    /// Returns the two prime factors of the modulus.
    fn primes(&self) -> &[BigUint];
}

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

/// Represents a whole RSA key, public and private parts.
///
/// Immutable once constructed; regenerating a key means constructing a new
/// value. The private exponent and prime factors are wiped on drop.
#[derive(Debug, Clone)]
pub struct RsaPrivateKey {
    pubkey_components: RsaPublicKey,
    d: BigUint,
    primes: Vec<BigUint>,
}

impl PublicKeyParts for RsaPublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PublicKeyParts for RsaPrivateKey {
    fn n(&self) -> &BigUint {
        &self.pubkey_components.n
    }

    fn e(&self) -> &BigUint {
        &self.pubkey_components.e
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> &BigUint {
        &self.d
    }

    fn primes(&self) -> &[BigUint] {
        &self.primes
    }
}

impl From<RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: RsaPrivateKey) -> Self {
        (&private_key).into()
    }
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        private_key.pubkey_components.clone()
    }
}

impl PartialEq for RsaPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.pubkey_components == other.pubkey_components
            && self.d == other.d
            && self.primes == other.primes
    }
}

impl Eq for RsaPrivateKey {}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
        self.primes.zeroize();
    }
}

impl ZeroizeOnDrop for RsaPrivateKey {}

impl RsaPrivateKey {
    /// Generates a new key from two freshly sampled `bit_size`-bit primes.
    ///
    /// The modulus ends up with `2·bit_size` bits. All randomness comes from
    /// the caller's generator, so generation is deterministic under a fixed
    /// seed.
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<RsaPrivateKey> {
        let components = generate_key_components(rng, bit_size)?;

        Ok(RsaPrivateKey {
            pubkey_components: RsaPublicKey {
                n: components.n,
                e: components.e,
            },
            d: components.d,
            primes: components.primes,
        })
    }

    /// Constructs a key from known primes and a chosen public exponent,
    /// deriving the private exponent.
    ///
    /// The primes are taken on trust; only structural invariants are
    /// checked: `p != q` ([`Error::DegenerateKey`]), both factors at least 2
    /// ([`Error::InvalidPrime`]), `2 <= e < (p-1)(q-1)` and `e` coprime to
    /// the totient ([`Error::InvalidExponent`], [`Error::NoInverse`]).
    pub fn from_primes(p: BigUint, q: BigUint, e: BigUint) -> Result<RsaPrivateKey> {
        let one = BigUint::one();
        let two = &one + &one;

        if p < two || q < two {
            return Err(Error::InvalidPrime);
        }
        if p == q {
            return Err(Error::DegenerateKey);
        }

        let phi = (&p - &one) * (&q - &one);
        if e < two || e >= phi {
            return Err(Error::InvalidExponent);
        }
        if !e.gcd(&phi).is_one() {
            return Err(Error::NoInverse);
        }

        let d = mod_inverse(&e, &phi)?;
        let n = &p * &q;

        Ok(RsaPrivateKey {
            pubkey_components: RsaPublicKey { n, e },
            d,
            primes: vec![p, q],
        })
    }

    /// Returns the public half of this key.
    pub fn to_public_key(&self) -> RsaPublicKey {
        self.pubkey_components.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    fn big(n: u64) -> BigUint {
        BigUint::from_u64(n).unwrap()
    }

    #[test]
    fn test_classic_fixture() {
        // p = 61, q = 53 => n = 3233, phi = 3120; e = 17 => d = 2753.
        let key = RsaPrivateKey::from_primes(big(61), big(53), big(17)).unwrap();

        assert_eq!(key.n(), &big(3233));
        assert_eq!(key.e(), &big(17));
        assert_eq!(key.d(), &big(2753));
        assert_eq!(key.primes(), &[big(61), big(53)][..]);
    }

    #[test]
    fn test_from_primes_validation() {
        assert_eq!(
            RsaPrivateKey::from_primes(big(61), big(61), big(17)).err(),
            Some(Error::DegenerateKey)
        );
        assert_eq!(
            RsaPrivateKey::from_primes(big(1), big(53), big(17)).err(),
            Some(Error::InvalidPrime)
        );
        assert_eq!(
            RsaPrivateKey::from_primes(big(61), big(53), big(1)).err(),
            Some(Error::InvalidExponent)
        );
        assert_eq!(
            RsaPrivateKey::from_primes(big(61), big(53), big(3120)).err(),
            Some(Error::InvalidExponent)
        );
        // gcd(6, 3120) != 1
        assert_eq!(
            RsaPrivateKey::from_primes(big(61), big(53), big(6)).err(),
            Some(Error::NoInverse)
        );
    }

    #[test]
    fn test_generated_primes_are_distinct() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for _ in 0..10 {
            let key = RsaPrivateKey::new(&mut rng, 16).unwrap();
            assert_ne!(key.primes()[0], key.primes()[1]);
        }
    }

    #[test]
    fn test_public_key_extraction() {
        let key = RsaPrivateKey::from_primes(big(61), big(53), big(17)).unwrap();
        let public_key: RsaPublicKey = (&key).into();

        assert_eq!(public_key.n(), key.n());
        assert_eq!(public_key.e(), key.e());
        assert_eq!(public_key, key.to_public_key());
    }

    #[test]
    fn test_invalid_bit_width() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        assert_eq!(
            RsaPrivateKey::new(&mut rng, 0).err(),
            Some(Error::InvalidBitWidth)
        );
    }
}
