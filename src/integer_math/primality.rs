// src/integer_math/primality.rs
//
// Deterministic primality by trial division over the 6k±1 wheel.
// Complexity: O(sqrt(n) / 3)
//
// Every prime above 3 is of the form 6k - 1 or 6k + 1, so after ruling out
// multiples of 2 and 3 only a third of the candidates below sqrt(n) need to
// be tried.

use num::Integer;

/// True if `n` is prime. Zero, one and negative numbers are not prime.
///
/// # Examples
/// ```
/// use intmath::integer_math::primality::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(91)); // 7 × 13
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    if n <= 3 {
        return true;
    }

    if n.is_even() || n.is_multiple_of(&3) {
        return false;
    }

    // Candidates i = 6k - 1 and i + 2 = 6k + 1
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
