//! Integer parsing and factorisation helpers

use anyhow::{Context, Result};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Parse a single integer token.
pub fn parse_int<T>(token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    token
        .parse()
        .with_context(|| format!("invalid integer {token:?}"))
}

/// Parse a whitespace-separated line of integers, keeping their order.
pub fn parse_ints<T>(line: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    line.split_whitespace().map(parse_int).collect()
}

/// Prime factors of `n` in ascending order, with multiplicity.
///
/// `0` and `1` have no factors.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }

    let mut i = 3;
    while i <= n / i {
        while n % i == 0 {
            factors.push(i);
            n /= i;
        }
        i += 2;
    }

    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Least common multiple, built from the highest power of each prime that
/// divides any of the inputs. `lcm(&[]) == 1`.
pub fn lcm(numbers: &[u64]) -> u64 {
    let mut powers: BTreeMap<u64, usize> = BTreeMap::new();
    for &number in numbers {
        for (prime, count) in prime_factors(number).into_iter().counts() {
            let entry = powers.entry(prime).or_default();
            *entry = (*entry).max(count);
        }
    }

    powers
        .into_iter()
        .map(|(prime, count)| prime.pow(count as u32))
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_ints() {
        assert_eq!(parse_ints::<i64>("0 3 -6  9").unwrap(), vec![0, 3, -6, 9]);
        assert!(parse_ints::<i64>("").unwrap().is_empty());
        assert!(parse_ints::<u32>("1 two 3").is_err());
    }

    #[test]
    fn test_parse_int_error_names_token() {
        let err = parse_int::<u32>("12a").unwrap_err();
        assert!(err.to_string().contains("12a"));
    }

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(36), vec![2, 2, 3, 3]);
        assert_eq!(prime_factors(97), vec![97]);
        assert_eq!(prime_factors(2 * 3 * 5 * 7 * 11 * 13), vec![2, 3, 5, 7, 11, 13]);
        assert!(prime_factors(1).is_empty());
        assert!(prime_factors(0).is_empty());
    }

    #[test]
    fn test_prime_factors_near_u64_max() {
        assert_eq!(prime_factors(18_446_744_073_709_551_557), vec![18_446_744_073_709_551_557]);
        assert_eq!(prime_factors(u64::MAX), vec![3, 5, 17, 257, 641, 65_537, 6_700_417]);
    }

    #[test]
    fn test_lcm_uses_highest_powers() {
        assert_eq!(lcm(&[2, 3, 4]), 12);
        assert_eq!(lcm(&[4, 6]), 12);
        assert_eq!(lcm(&[8, 12, 18]), 72);
        assert_eq!(lcm(&[]), 1);
    }

    proptest! {
        #[test]
        fn prop_factors_multiply_back(n in 2u64..5_000_000) {
            let factors = prime_factors(n);
            prop_assert_eq!(factors.iter().product::<u64>(), n);
            prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_lcm_is_common_multiple(numbers in prop::collection::vec(1u64..500, 1..5)) {
            let m = lcm(&numbers);
            prop_assert!(numbers.iter().all(|n| m % n == 0));
        }
    }
}
