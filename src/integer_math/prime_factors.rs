// src/integer_math/prime_factors.rs
//
// Complete factorization by trial division.
// Complexity: O(sqrt(n))
//
// Strip every factor of 2, then try odd divisors 3, 5, 7, ... while the
// divisor squared does not exceed what is left. Whatever remains above 1
// afterwards has no divisor below its square root and is itself prime.

use log::debug;
use num::Integer;
use crate::core::error::DomainError;
use crate::core::positive::Positive;

/// Prime factors of `n` in ascending order, repeated by multiplicity.
///
/// `1` has no prime factors and yields an empty vector.
///
/// # Examples
/// ```
/// use intmath::core::Positive;
/// use intmath::integer_math::prime_factors::prime_factors;
///
/// let factors = prime_factors(Positive::new(360).unwrap());
/// assert_eq!(factors, vec![2, 2, 2, 3, 3, 5]);
/// ```
pub fn prime_factors(n: Positive) -> Vec<i64> {
    let mut remaining = n.value();
    let mut factors = Vec::new();

    // Factor out all 2s
    while remaining.is_even() {
        factors.push(2);
        remaining /= 2;
    }

    // Try odd divisors
    let mut divisor = 3;
    while divisor <= remaining / divisor {
        while remaining.is_multiple_of(&divisor) {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 2;
    }

    // If remaining > 1, it's a prime factor
    if remaining > 1 {
        factors.push(remaining);
    }

    debug!("prime_factors: {} = {:?}", n, factors);
    factors
}

/// Validating form of [`prime_factors`] for a raw integer.
pub fn prime_factors_of(n: i64) -> Result<Vec<i64>, DomainError> {
    Ok(prime_factors(Positive::new(n)?))
}
