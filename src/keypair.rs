// RSA key pair generation.

use crate::numtheory::{gcd, modular_inverse};
use crate::prime::generate_prime;
use crate::{Error, Result};

use num_bigint::BigUint;
use num_traits::One;
use rand::{rngs::StdRng, Rng, SeedableRng};

const DEFAULT_PRIME_BITS: u64 = 1024;
const DEFAULT_MILLER_RABIN_ROUNDS: u32 = 20;

/// Shareable half of a key pair: the modulus `n` and the public exponent `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) e: BigUint,
}

impl PublicKey {
    /// The modulus `n = p * q`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The public exponent `e`.
    pub fn e(&self) -> &BigUint {
        &self.e
    }
}

/// Secret half of a key pair.
///
/// Holds the private exponent alongside the factorization it was derived
/// from. None of the fields are exposed; decryption borrows this view.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub(crate) n: BigUint,
    pub(crate) d: BigUint,
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) totient: BigUint,
}

/// A freshly generated RSA key pair.
pub struct KeyPair {
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with the default parameters.
    pub fn generate(rng: &mut impl Rng) -> Result<Self> {
        KeyPairBuilder::new().build(rng)
    }

    /// The shareable `(n, e)` view.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The secret view used for decryption.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

/// Builder for key pairs with configurable generation parameters.
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    prime_bits: u64,
    miller_rabin_rounds: u32,
}

impl KeyPairBuilder {
    pub fn new() -> Self {
        Self {
            prime_bits: DEFAULT_PRIME_BITS,
            miller_rabin_rounds: DEFAULT_MILLER_RABIN_ROUNDS,
        }
    }

    /// Bit length of each generated prime. The modulus ends up roughly twice
    /// this wide.
    pub fn prime_bits(mut self, bits: u64) -> Self {
        self.prime_bits = bits;
        self
    }

    /// Number of Miller-Rabin rounds each prime candidate must pass.
    pub fn miller_rabin_rounds(mut self, rounds: u32) -> Self {
        self.miller_rabin_rounds = rounds;
        self
    }

    /// Generate the key pair.
    pub fn build(self, rng: &mut impl Rng) -> Result<KeyPair> {
        // Finding the primes dominates the cost, so search for the two
        // concurrently. Each search gets a child RNG derived from the
        // caller's, which keeps a seeded `rng` reproducible.
        let mut p_rng = StdRng::from_seed(rng.gen());
        let mut q_rng = StdRng::from_seed(rng.gen());
        let (p, q) = rayon::join(
            || generate_prime(self.prime_bits, self.miller_rabin_rounds, &mut p_rng),
            || generate_prime(self.prime_bits, self.miller_rabin_rounds, &mut q_rng),
        );
        let (p, q) = (p?, q?);

        let n = &p * &q;
        let totient = carmichael_totient(&p, &q);
        let e = choose_public_exponent(&totient)?;
        let d = modular_inverse(&e, &totient)?;

        Ok(KeyPair {
            public: PublicKey { n: n.clone(), e },
            secret: PrivateKey { n, d, p, q, totient },
        })
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Carmichael totient of n = p * q, i.e. lcm(p - 1, q - 1).
fn carmichael_totient(p: &BigUint, q: &BigUint) -> BigUint {
    let one = BigUint::one();
    let p_minus_one = p - &one;
    let q_minus_one = q - &one;
    (&p_minus_one * &q_minus_one) / gcd(&p_minus_one, &q_minus_one)
}

// Largest e in (1, totient) with gcd(e, totient) = 1, scanning downward from
// totient - 1.
fn choose_public_exponent(totient: &BigUint) -> Result<BigUint> {
    let one = BigUint::one();
    let mut candidate = totient - &one;
    while candidate > one {
        if gcd(&candidate, totient).is_one() {
            return Ok(candidate);
        }
        candidate -= &one;
    }
    Err(Error::ExponentNotFound)
}
