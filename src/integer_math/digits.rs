// src/integer_math/digits.rs

/// Number of base-10 digits in `n`. The sign is not counted and `0` has one digit.
///
/// Works across the full `i64` range: the value is divided while still
/// signed, so `i64::MIN` is never negated.
pub fn count_digits(n: i64) -> u32 {
    if n == 0 {
        return 1;
    }

    let mut remaining = n;
    let mut count = 0;
    while remaining != 0 {
        remaining /= 10;
        count += 1;
    }
    count
}

/// True if the decimal digits of `n` read the same in both directions.
///
/// Negative numbers are never palindromes. The reversed value is built in a
/// `u64`, which holds the reversal of any 19-digit `i64`.
pub fn is_palindrome(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let original = n as u64;
    let mut remaining = original;
    let mut reversed = 0u64;
    while remaining > 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }

    original == reversed
}

/// Palindrome check on the rendered digit string; agrees with [`is_palindrome`].
pub fn is_palindrome_by_digits(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    // Never empty: "0" renders as one digit.
    let digits = n.to_string().into_bytes();
    let (mut left, mut right) = (0, digits.len() - 1);
    while left < right {
        if digits[left] != digits[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}
