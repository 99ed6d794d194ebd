// src/integer_math/factorial.rs

use crate::core::error::DomainError;

/// Largest n whose factorial fits an `i64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

const OVERFLOW: DomainError = DomainError::Overflow { operation: "factorial" };

/// n! computed iteratively.
///
/// Negative input has no factorial and returns [`DomainError::Negative`].
/// Results past `i64::MAX` (any n above [`MAX_FACTORIAL_INPUT`]) return
/// [`DomainError::Overflow`]; the product never wraps.
pub fn factorial(n: i64) -> Result<i64, DomainError> {
    if n < 0 {
        return Err(DomainError::Negative(n));
    }

    let mut product: i64 = 1;
    for i in 2..=n {
        product = product.checked_mul(i).ok_or(OVERFLOW)?;
    }
    Ok(product)
}

/// n! as n × (n - 1)!; same contract as [`factorial`].
pub fn factorial_recursive(n: i64) -> Result<i64, DomainError> {
    if n < 0 {
        return Err(DomainError::Negative(n));
    }

    if n <= 1 {
        return Ok(1);
    }

    // Recursion depth stays small: anything past 21 levels has overflowed.
    if n > MAX_FACTORIAL_INPUT {
        return Err(OVERFLOW);
    }

    factorial_recursive(n - 1)?.checked_mul(n).ok_or(OVERFLOW)
}
