use num_bigint::BigUint;

/// Failures surfaced by key generation and the cipher.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("prime bit length must be at least 2, got {0}")]
    BitLengthTooSmall(u64),

    #[error("ciphertext token `{0}` is not a decimal integer")]
    MalformedToken(String),

    #[error("decrypted value {0} is not a Unicode code point")]
    InvalidCodePoint(BigUint),

    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: BigUint, modulus: BigUint },

    #[error("no public exponent coprime with the totient")]
    ExponentNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
