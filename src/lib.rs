#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

//! Textbook RSA, built from first principles: binary modular
//! exponentiation, Miller–Rabin primality testing, rejection-sampled prime
//! generation, and modular inverse via the extended Euclidean algorithm,
//! composed into a symbol-wise encrypt/decrypt pipeline.
//!
//! This crate exists to make the number-theoretic engine of RSA readable
//! and testable. It is **not** a production cryptosystem: there is no
//! padding, no chaining, no constant-time arithmetic, and key sizes small
//! enough to study are small enough to factor.
//!
//! # Usage
//!
//! ```
//! use rand_chacha::ChaCha8Rng;
//! use rand_core::SeedableRng;
//! use textbook_rsa::{cipher, RsaPrivateKey, RsaPublicKey};
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//!
//! let private_key = RsaPrivateKey::new(&mut rng, 32).expect("failed to generate a key");
//! let public_key = RsaPublicKey::from(&private_key);
//!
//! // Encrypt, one ciphertext entry per symbol code.
//! let message: Vec<u64> = "hello world".chars().map(|c| c as u64).collect();
//! let ciphertext = cipher::encrypt(&public_key, &message).expect("failed to encrypt");
//!
//! // Decrypt.
//! let recovered = cipher::decrypt(&private_key, &ciphertext).expect("failed to decrypt");
//! assert_eq!(recovered, message);
//! ```
//!
//! Converting between text and symbol codes is the caller's concern; the
//! engine itself never touches an interactive stream.

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

pub mod cipher;
pub mod errors;
pub mod math;
pub mod prime;

#[cfg(test)]
mod dummy_rng;
mod generate;
mod key;
mod prime_rand;

pub use crate::{
    cipher::{Ciphertext, SymbolCode},
    errors::{Error, Result},
    key::{PrivateKeyParts, PublicKeyParts, RsaPrivateKey, RsaPublicKey},
    prime_rand::RandPrime,
};
