// Miller-Rabin primality testing and random prime generation.

use crate::{Error, Result};

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};

pub fn is_probably_prime(number: &BigUint, rounds: u32, rng: &mut impl RandBigInt) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if number <= &three {
        return number > &one;
    }
    if (number % &two).is_zero() || (number % &three).is_zero() {
        return false;
    }

    // Write number - 1 as d * 2^s with d odd.
    let number_minus_one = number - &one;
    let mut d = number_minus_one.clone();
    let mut s = 0u64;
    while (&d % &two).is_zero() {
        d /= &two;
        s += 1;
    }

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &number_minus_one);
        let mut x = a.modpow(&d, number);
        if x == one || x == number_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, number);
            if x == number_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

pub fn generate_prime(bits: u64, rounds: u32, rng: &mut impl RandBigInt) -> Result<BigUint> {
    if bits < 2 {
        return Err(Error::BitLengthTooSmall(bits));
    }

    let one = BigUint::one();
    // Candidates come from [2^(bits - 1) + 1, 2^bits - 1].
    let low = (&one << (bits - 1)) + &one;
    let high = &one << bits;
    loop {
        let candidate = rng.gen_biguint_range(&low, &high);
        if is_probably_prime(&candidate, rounds, rng) {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::Num;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    const ROUNDS: u32 = 20;

    #[rstest]
    #[case(2u64)]
    #[case(3u64)]
    #[case(5u64)]
    #[case(7u64)]
    #[case(97u64)]
    #[case(7919u64)]
    fn is_probably_prime_accepts_small_primes(#[case] prime: u64) {
        let mut rng = StdRng::from_seed([101; 32]);

        assert!(is_probably_prime(&prime.into(), ROUNDS, &mut rng));
    }

    #[rstest]
    #[case(0u64)]
    #[case(1u64)]
    #[case(4u64)]
    #[case(9u64)]
    #[case(25u64)]
    #[case(100u64)]
    // Carmichael numbers; 1729 is not caught by the divisibility shortcuts.
    #[case(561u64)]
    #[case(1729u64)]
    fn is_probably_prime_rejects_composites(#[case] composite: u64) {
        let mut rng = StdRng::from_seed([101; 32]);

        assert!(!is_probably_prime(&composite.into(), ROUNDS, &mut rng));
    }

    #[test]
    fn is_probably_prime_accepts_a_mersenne_prime() {
        // 2^127 - 1
        let prime =
            BigUint::from_str_radix("170141183460469231731687303715884105727", 10).unwrap();
        let mut rng = StdRng::from_seed([101; 32]);

        assert!(is_probably_prime(&prime, ROUNDS, &mut rng));
    }

    #[test]
    fn is_probably_prime_rejects_a_large_semiprime() {
        let mersenne =
            BigUint::from_str_radix("170141183460469231731687303715884105727", 10).unwrap();
        let square = &mersenne * &mersenne;
        let mut rng = StdRng::from_seed([101; 32]);

        assert!(!is_probably_prime(&square, ROUNDS, &mut rng));
    }

    #[rstest]
    #[case(2)]
    #[case(8)]
    #[case(16)]
    #[case(64)]
    fn generate_prime_stays_inside_the_requested_bit_range(#[case] bits: u64) {
        let mut rng = StdRng::from_seed([101; 32]);

        let prime = generate_prime(bits, ROUNDS, &mut rng).unwrap();

        let one = BigUint::one();
        assert!(prime > (&one << (bits - 1)));
        assert!(prime < (&one << bits));
        assert!(is_probably_prime(&prime, ROUNDS, &mut rng));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn generate_prime_rejects_widths_below_two_bits(#[case] bits: u64) {
        let mut rng = StdRng::from_seed([101; 32]);

        assert_eq!(
            generate_prime(bits, ROUNDS, &mut rng),
            Err(Error::BitLengthTooSmall(bits))
        );
    }

    #[test]
    fn generate_prime_is_deterministic_for_a_fixed_seed() {
        let mut first_rng = StdRng::from_seed([7; 32]);
        let mut second_rng = StdRng::from_seed([7; 32]);

        let first = generate_prime(32, ROUNDS, &mut first_rng).unwrap();
        let second = generate_prime(32, ROUNDS, &mut second_rng).unwrap();

        assert_eq!(first, second);
    }
}
