// src/integer_math/gcd.rs

use crate::core::error::DomainError;

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Signs are ignored: the result is gcd(|a|, |b|), so it is never negative.
/// `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`. The result is unsigned because
/// `gcd(i64::MIN, 0) == 2^63` does not fit an `i64`.
pub fn gcd(a: i64, b: i64) -> u64 {
    euclid(a.unsigned_abs(), b.unsigned_abs())
}

fn euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Recursive Euclid; always equal to [`gcd`].
pub fn gcd_recursive(a: i64, b: i64) -> u64 {
    fn recurse(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            recurse(b, a % b)
        }
    }

    recurse(a.unsigned_abs(), b.unsigned_abs())
}

/// Least common multiple of |a| and |b|; `0` when either is `0`.
///
/// Computed as `(|a| / gcd) * |b|` so the only intermediate that can
/// overflow is the result itself.
pub fn lcm(a: i64, b: i64) -> Result<u64, DomainError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let divisor = gcd(a, b);
    (a.unsigned_abs() / divisor)
        .checked_mul(b.unsigned_abs())
        .ok_or(DomainError::Overflow { operation: "lcm" })
}

/// gcd/lcm folded over any number of values.
pub struct GCD;

impl GCD {
    /// LCM of every value; `1` for an empty slice.
    pub fn find_lcm(numbers: &[i64]) -> Result<u64, DomainError> {
        numbers.iter().try_fold(1u64, |acc, &x| Self::find_lcm_pair(acc, x))
    }

    fn find_lcm_pair(acc: u64, value: i64) -> Result<u64, DomainError> {
        if acc == 0 || value == 0 {
            return Ok(0);
        }
        let value = value.unsigned_abs();
        (acc / euclid(acc, value))
            .checked_mul(value)
            .ok_or(DomainError::Overflow { operation: "lcm" })
    }

    /// GCD of every value; `0` for an empty slice.
    pub fn find_gcd(numbers: &[i64]) -> u64 {
        numbers.iter().fold(0u64, |acc, &x| euclid(acc, x.unsigned_abs()))
    }

    pub fn are_coprime(numbers: &[i64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}
