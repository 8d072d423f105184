//! Error types.

/// Alias for [`core::result::Result`] with the `textbook-rsa` [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Requested prime bit-width is below the 2-bit minimum.
    InvalidBitWidth,

    /// Rejection sampling for a prime candidate exhausted its attempt budget.
    PrimeGenerationTimeout,

    /// Resampling could not produce two distinct primes within its budget.
    DegenerateKey,

    /// The public-exponent search exhausted its budget without finding a
    /// candidate coprime to the totient.
    NoCoprimeFound,

    /// No modular inverse exists: the exponent and the totient share a
    /// common factor.
    NoInverse,

    /// A caller-supplied prime factor failed validation.
    InvalidPrime,

    /// A caller-supplied public exponent is outside `[2, phi)`.
    InvalidExponent,

    /// A plaintext symbol code is not representable under the key modulus.
    SymbolOutOfRange,

    /// A ciphertext entry could not be decrypted to a symbol code.
    Decryption,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidBitWidth => write!(f, "prime size must be at least 2 bits"),
            Error::PrimeGenerationTimeout => write!(f, "prime generation exceeded attempt budget"),
            Error::DegenerateKey => write!(f, "could not generate two distinct primes"),
            Error::NoCoprimeFound => write!(f, "no exponent coprime to the totient found"),
            Error::NoInverse => write!(f, "no modular inverse exists"),
            Error::InvalidPrime => write!(f, "invalid prime value"),
            Error::InvalidExponent => write!(f, "invalid public exponent"),
            Error::SymbolOutOfRange => write!(f, "symbol code exceeds the key modulus"),
            Error::Decryption => write!(f, "decryption error"),
        }
    }
}

impl core::error::Error for Error {}
