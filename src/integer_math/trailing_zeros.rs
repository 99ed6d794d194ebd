// src/integer_math/trailing_zeros.rs

/// Number of trailing zero digits of n!, without computing n!.
///
/// Each trailing zero is a factor of 10 = 2 × 5 and factors of 2 always
/// outnumber factors of 5, so the count is the multiplicity of 5 in n!:
/// floor(n/5) + floor(n/25) + floor(n/125) + ...
///
/// Inputs below 5, negatives included, give 0.
///
/// # Examples
/// ```
/// use intmath::integer_math::trailing_zeros::trailing_zeros_of_factorial;
///
/// assert_eq!(trailing_zeros_of_factorial(25), 6);
/// assert_eq!(trailing_zeros_of_factorial(1000), 249);
/// ```
pub fn trailing_zeros_of_factorial(n: i64) -> u64 {
    let mut count = 0u64;
    let mut power: i64 = 5;
    while power <= n {
        count += (n / power) as u64;
        // 5^28 exceeds i64::MAX; no larger power can divide into n
        match power.checked_mul(5) {
            Some(next) => power = next,
            None => break,
        }
    }
    count
}
