// Character-wise textbook RSA over Unicode code points.

use crate::keypair::{PrivateKey, PublicKey};
use crate::{Error, Result};

use num_bigint::BigUint;
use num_traits::Num;

/// Encrypt `message` one character at a time under `key`.
///
/// Each code point is raised to the public exponent modulo `n` and written in
/// decimal followed by a single space. Round-tripping requires every code
/// point to be smaller than `n`. Textbook RSA has no padding; nothing about
/// this scheme is safe for real data.
pub fn encrypt(message: &str, key: &PublicKey) -> String {
    let mut ciphertext = String::new();
    for character in message.chars() {
        let m = BigUint::from(character as u32);
        let c = m.modpow(&key.e, &key.n);
        ciphertext.push_str(&c.to_str_radix(10));
        ciphertext.push(' ');
    }
    ciphertext
}

/// Decrypt a ciphertext produced by [`encrypt`] with the matching key.
pub fn decrypt(ciphertext: &str, key: &PrivateKey) -> Result<String> {
    let mut message = String::new();
    for token in ciphertext.split_whitespace() {
        let c = BigUint::from_str_radix(token, 10)
            .map_err(|_| Error::MalformedToken(token.to_string()))?;
        let m = c.modpow(&key.d, &key.n);
        let character = u32::try_from(&m)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| Error::InvalidCodePoint(m))?;
        message.push(character);
    }
    Ok(message)
}
