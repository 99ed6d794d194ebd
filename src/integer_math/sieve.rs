// src/integer_math/sieve.rs
//
// Sieve of Eratosthenes over a bit vector.
// Complexity: O(n log log n) time, n + 1 bits of memory.

use bitvec::prelude::*;
use log::debug;

/// One flag per integer in `[0, limit]`; a flag is set iff its index is prime.
fn sieve(limit: usize) -> BitVec {
    let mut is_prime = bitvec![1; limit + 1];
    is_prime.set(0, false);
    if limit >= 1 {
        is_prime.set(1, false);
    }

    let mut p = 2;
    while p <= limit / p {
        if is_prime[p] {
            // Multiples below p*p were already crossed off by smaller primes
            let mut multiple = p * p;
            while multiple <= limit {
                is_prime.set(multiple, false);
                multiple += p;
            }
        }
        p += 1;
    }

    debug!("sieve: {} primes up to {}", is_prime.count_ones(), limit);
    is_prime
}

/// All primes `p` with `2 <= p <= n`, ascending. Empty for `n < 2`.
///
/// Allocates n + 1 bits; callers taking untrusted bounds should cap `n`.
///
/// # Examples
/// ```
/// use intmath::integer_math::sieve::primes_up_to;
///
/// assert_eq!(primes_up_to(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(primes_up_to(1).is_empty());
/// ```
pub fn primes_up_to(n: i64) -> Vec<i64> {
    if n < 2 {
        return Vec::new();
    }

    sieve(n as usize).iter_ones().map(|i| i as i64).collect()
}

/// A sieved range `[0, limit]` kept around for repeated primality lookups.
pub struct PrimeTable {
    limit: i64,
    flags: BitVec,
}

impl PrimeTable {
    /// Sieve every integer up to `limit`. A negative limit gives an empty table.
    pub fn new(limit: i64) -> Self {
        let limit = limit.max(0);
        PrimeTable {
            limit,
            flags: sieve(limit as usize),
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// True if `value` is a prime within the table's range. Values outside
    /// `[0, limit]` are reported as not contained.
    pub fn contains(&self, value: i64) -> bool {
        value >= 0 && value <= self.limit && self.flags[value as usize]
    }

    /// Number of primes in the table.
    pub fn len(&self) -> usize {
        self.flags.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.not_any()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.flags.iter_ones().map(|i| i as i64)
    }

    pub fn primes(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer_math::naive;
    use crate::integer_math::primality::is_prime;

    #[test]
    fn test_below_two_is_empty() {
        assert!(primes_up_to(i64::MIN).is_empty());
        assert!(primes_up_to(-1).is_empty());
        assert!(primes_up_to(0).is_empty());
        assert!(primes_up_to(1).is_empty());
    }

    #[test]
    fn test_small_limits() {
        assert_eq!(primes_up_to(2), vec![2]);
        assert_eq!(primes_up_to(3), vec![2, 3]);
        assert_eq!(primes_up_to(4), vec![2, 3]);
        assert_eq!(primes_up_to(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(primes_up_to(29).last(), Some(&29));
    }

    #[test]
    fn test_prime_counts() {
        assert_eq!(primes_up_to(100).len(), 25);
        assert_eq!(primes_up_to(1_000).len(), 168);
        assert_eq!(primes_up_to(100_000).len(), 9_592);
    }

    #[test]
    fn test_matches_per_element_scan() {
        for n in [0, 1, 2, 10, 97, 100, 121, 1_000, 4_099] {
            assert_eq!(primes_up_to(n), naive::primes_up_to(n), "n = {}", n);
        }
    }

    #[test]
    fn test_agrees_with_is_prime() {
        let table = PrimeTable::new(20_000);
        for n in -10..=20_000 {
            assert_eq!(table.contains(n), is_prime(n), "n = {}", n);
        }
    }

    #[test]
    fn test_prime_table() {
        let table = PrimeTable::new(30);
        assert_eq!(table.limit(), 30);
        assert_eq!(table.len(), 10);
        assert!(!table.is_empty());
        assert_eq!(table.primes(), primes_up_to(30));
        assert!(table.contains(29));
        assert!(!table.contains(31)); // outside the sieved range
        assert!(!table.contains(-2));
    }

    #[test]
    fn test_empty_prime_tables() {
        for limit in [-5, 0, 1] {
            let table = PrimeTable::new(limit);
            assert!(table.is_empty());
            assert_eq!(table.len(), 0);
            assert_eq!(table.iter().count(), 0);
        }
    }
}
