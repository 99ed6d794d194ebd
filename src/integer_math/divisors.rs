// src/integer_math/divisors.rs
//
// Divisor enumeration in O(sqrt(n)).
//
// Divisors come in pairs (i, n / i) with i <= sqrt(n), so scanning up to the
// square root finds all of them. A perfect square contributes its root once.

use log::debug;
use num::Integer;
use crate::core::error::DomainError;
use crate::core::positive::Positive;

/// All positive divisors of `n`.
///
/// The result is in discovery order (each small divisor followed by its
/// cofactor), not sorted. Sort it if order matters.
///
/// # Examples
/// ```
/// use intmath::core::Positive;
/// use intmath::integer_math::divisors::divisors;
///
/// let mut d = divisors(Positive::new(12).unwrap());
/// d.sort_unstable();
/// assert_eq!(d, vec![1, 2, 3, 4, 6, 12]);
/// ```
pub fn divisors(n: Positive) -> Vec<i64> {
    let n = n.value();
    let mut found = Vec::new();

    // i <= n / i keeps the bound check from overflowing near i64::MAX
    let mut i = 1;
    while i <= n / i {
        if n.is_multiple_of(&i) {
            found.push(i);
            let paired = n / i;
            if paired != i {
                found.push(paired);
            }
        }
        i += 1;
    }

    debug!("divisors: {} has {} divisors", n, found.len());
    found
}

/// Validating form of [`divisors`] for a raw integer.
pub fn divisors_of(n: i64) -> Result<Vec<i64>, DomainError> {
    Ok(divisors(Positive::new(n)?))
}
