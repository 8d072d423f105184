//! Symbol-wise raw RSA encryption and decryption.
//!
//! Each plaintext symbol code is transformed independently: `m^e mod n` on
//! the way in, `c^d mod n` on the way out. No chaining and no padding, so
//! identical symbols under the same key always yield identical ciphertext
//! entries. That determinism is a documented property of the scheme, not a
//! defect; anything needing semantic security belongs in a padded scheme,
//! which is out of scope here.

use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::errors::{Error, Result};
use crate::key::{PrivateKeyParts, PublicKeyParts};
use crate::math::modpow;

/// A plaintext symbol code, as produced by a presentation layer (e.g. one
/// code per character).
pub type SymbolCode = u64;

/// An ordered sequence of encrypted symbols, positionally matching the
/// plaintext.
pub type Ciphertext = Vec<BigUint>;

/// Encrypts a sequence of symbol codes with the public key.
///
/// Each code `m` must satisfy `m < n`; a larger code cannot be represented
/// losslessly and is rejected with [`Error::SymbolOutOfRange`]. On any
/// failure no ciphertext is returned.
pub fn encrypt<K: PublicKeyParts>(key: &K, message: &[SymbolCode]) -> Result<Ciphertext> {
    message
        .iter()
        .map(|&code| {
            let m = BigUint::from(code);
            if &m >= key.n() {
                return Err(Error::SymbolOutOfRange);
            }
            Ok(modpow(&m, key.e(), key.n()))
        })
        .collect()
}

/// Decrypts a ciphertext back into symbol codes with the private key.
///
/// Entries must lie in `[0, n)`, and every recovered value must fit a
/// [`SymbolCode`]; anything else means the ciphertext was not produced under
/// this key and is rejected with [`Error::Decryption`].
pub fn decrypt<K: PrivateKeyParts>(key: &K, ciphertext: &[BigUint]) -> Result<Vec<SymbolCode>> {
    ciphertext
        .iter()
        .map(|c| {
            if c >= key.n() {
                return Err(Error::Decryption);
            }
            modpow(c, key.d(), key.n())
                .to_u64()
                .ok_or(Error::Decryption)
        })
        .collect()
}
