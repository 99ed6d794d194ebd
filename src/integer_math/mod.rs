// src/integer_math/mod.rs

pub mod digits;
pub mod divisors;
pub mod factorial;
pub mod gcd;
#[cfg(any(test, feature = "naive"))]
pub mod naive;
pub mod primality;
pub mod prime_factors;
pub mod sieve;
pub mod trailing_zeros;

pub use digits::{count_digits, is_palindrome, is_palindrome_by_digits};
pub use divisors::{divisors, divisors_of};
pub use factorial::{factorial, factorial_recursive, MAX_FACTORIAL_INPUT};
pub use gcd::{gcd, gcd_recursive, lcm, GCD};
pub use primality::is_prime;
pub use prime_factors::{prime_factors, prime_factors_of};
pub use sieve::{primes_up_to, PrimeTable};
pub use trailing_zeros::trailing_zeros_of_factorial;
