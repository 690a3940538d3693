// Euclidean toolkit behind the key derivation: greatest common divisor,
// extended gcd and modular inverses.

use crate::{Error, Result};

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Greatest common divisor via the iterative Euclidean algorithm.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm. Returns `(g, s, t)` where `g = gcd(a, b)`
/// and `a*s + b*t == g` (Bézout's identity).
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next = &old_r - &quotient * &r;
        old_r = r;
        r = next;

        let next = &old_s - &quotient * &s;
        old_s = s;
        s = next;

        let next = &old_t - &quotient * &t;
        old_t = t;
        t = next;
    }

    (old_r, old_s, old_t)
}

/// Inverse of `a` modulo `modulus`: the `x` in `[0, modulus)` with
/// `a * x ≡ 1 (mod modulus)`. Exists only when `gcd(a, modulus) == 1`.
pub fn modular_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let (g, mut s, _) = extended_gcd(&BigInt::from(a.clone()), &BigInt::from(modulus.clone()));
    if !g.is_one() {
        return Err(Error::NotInvertible {
            value: a.clone(),
            modulus: modulus.clone(),
        });
    }

    // The Bézout coefficient for `a` lies in (-modulus, modulus), so one
    // conditional add lands it in the canonical range.
    if s.is_negative() {
        s += BigInt::from(modulus.clone());
    }
    Ok(s.to_biguint()
        .expect("coefficient is non-negative after normalization"))
}
