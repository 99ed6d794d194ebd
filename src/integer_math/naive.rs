// src/integer_math/naive.rs
//
// Brute-force reference implementations.
//
// Each function here computes the same answer as its optimized counterpart
// in the sibling modules, using the most direct algorithm available. They
// exist to cross-check the optimized versions in tests and benchmarks and
// are only compiled for tests or with the `naive` feature.
//
// Operation            Reference           Optimized
// ───────────────────────────────────────────────────────────
// divisors             O(n) scan           O(sqrt(n)) paired scan
// is_prime             O(sqrt(n))          O(sqrt(n) / 3), 6k±1
// prime_factors        O(n)                O(sqrt(n)), odd candidates
// primes_up_to         O(n sqrt(n))        O(n log log n) sieve

use crate::core::positive::Positive;

/// Every positive divisor of `n`, found by testing each of `1..=n`. Ascending.
pub fn divisors(n: Positive) -> Vec<i64> {
    let n = n.value();
    (1..=n).filter(|i| n % i == 0).collect()
}

/// Trial division by every integer from 2 up to sqrt(n).
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Divides out every integer from 2 upward until nothing is left.
pub fn prime_factors(n: Positive) -> Vec<i64> {
    let mut remaining = n.value();
    let mut factors = Vec::new();

    let mut i = 2;
    while i <= remaining {
        while remaining % i == 0 {
            factors.push(i);
            remaining /= i;
        }
        i += 1;
    }
    factors
}

/// Primes up to `n` by testing each candidate individually.
pub fn primes_up_to(n: i64) -> Vec<i64> {
    (2..=n.max(1)).filter(|&i| is_prime(i)).collect()
}
