//! Textbook RSA built for study. Key pairs come from Miller-Rabin tested
//! primes; messages encrypt one character at a time with unpadded modular
//! exponentiation.
//!
//! Not fit for real data: identical characters produce identical ciphertext
//! blocks and the arithmetic makes no attempt at constant time.

mod cipher;
mod error;
mod keypair;
mod numtheory;
mod prime;

pub use cipher::{decrypt, encrypt};
pub use error::{Error, Result};
pub use keypair::{KeyPair, KeyPairBuilder, PrivateKey, PublicKey};
pub use numtheory::{extended_gcd, gcd, modular_inverse};
pub use prime::{generate_prime, is_probably_prime};
