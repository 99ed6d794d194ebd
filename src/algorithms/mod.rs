// src/algorithms/mod.rs
//
// Operation dispatcher: a uniform entry point over the integer_math functions.
//
// Operation          Arity   Complexity
// ─────────────────────────────────────────────
// count-digits       1       O(log n)
// is-palindrome      1       O(log n)
// divisors           1       O(sqrt(n))
// gcd                2       O(log min(a, b))
// lcm                2       O(log min(a, b))
// is-prime           1       O(sqrt(n) / 3)
// prime-factors      1       O(sqrt(n))
// primes             1       O(n log log n)
// factorial          1       O(n), n <= 20
// trailing-zeros     1       O(log n)
//
// Usage:
//   let op: Operation = "gcd".parse()?;
//   let outcome = evaluate(op, &[270, 192], &config)?;   // Outcome::Count(6)

use std::fmt;
use std::str::FromStr;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::config::IntmathConfig;
use crate::core::error::DomainError;
use crate::core::positive::Positive;
use crate::integer_math;

/// Every operation the front end can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CountDigits,
    IsPalindrome,
    Divisors,
    Gcd,
    Lcm,
    IsPrime,
    PrimeFactors,
    Primes,
    Factorial,
    TrailingZeros,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::CountDigits,
        Operation::IsPalindrome,
        Operation::Divisors,
        Operation::Gcd,
        Operation::Lcm,
        Operation::IsPrime,
        Operation::PrimeFactors,
        Operation::Primes,
        Operation::Factorial,
        Operation::TrailingZeros,
    ];

    /// Command line name
    pub fn name(&self) -> &'static str {
        match self {
            Self::CountDigits => "count-digits",
            Self::IsPalindrome => "is-palindrome",
            Self::Divisors => "divisors",
            Self::Gcd => "gcd",
            Self::Lcm => "lcm",
            Self::IsPrime => "is-prime",
            Self::PrimeFactors => "prime-factors",
            Self::Primes => "primes",
            Self::Factorial => "factorial",
            Self::TrailingZeros => "trailing-zeros",
        }
    }

    /// Number of integer arguments
    pub fn arity(&self) -> usize {
        match self {
            Self::Gcd | Self::Lcm => 2,
            _ => 1,
        }
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            Self::CountDigits | Self::IsPalindrome | Self::TrailingZeros => "O(log n)",
            Self::Divisors | Self::PrimeFactors => "O(sqrt(n))",
            Self::Gcd | Self::Lcm => "O(log min(a, b))",
            Self::IsPrime => "O(sqrt(n) / 3)",
            Self::Primes => "O(n log log n)",
            Self::Factorial => "O(n)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CountDigits => "number of decimal digits of n",
            Self::IsPalindrome => "whether n reads the same reversed",
            Self::Divisors => "all positive divisors of n (n >= 1)",
            Self::Gcd => "greatest common divisor of |a| and |b|",
            Self::Lcm => "least common multiple of |a| and |b|",
            Self::IsPrime => "whether n is prime",
            Self::PrimeFactors => "prime factors of n with multiplicity (n >= 1)",
            Self::Primes => "all primes up to n",
            Self::Factorial => "n! (0 <= n <= 20)",
            Self::TrailingZeros => "trailing zero digits of n!",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| OperationError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("unknown operation `{0}`")]
    Unknown(String),

    #[error("`{operation}` takes {expected} argument(s), got {got}")]
    Arity {
        operation: Operation,
        expected: usize,
        got: usize,
    },

    #[error("sieve bound {requested} exceeds the configured limit {limit}")]
    LimitExceeded { requested: i64, limit: i64 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Bool(bool),
    Count(u64),
    Integer(i64),
    List(Vec<i64>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bool(value) => write!(f, "{}", value),
            Outcome::Count(value) => write!(f, "{}", value),
            Outcome::Integer(value) => write!(f, "{}", value),
            Outcome::List(values) => {
                let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                f.write_str(&rendered.join(" "))
            }
        }
    }
}

/// Runs `operation` on `args`.
///
/// # Returns
/// * `Ok(outcome)` - the computed value
/// * `Err(OperationError)` - wrong argument count, a sieve bound above
///   `config.sieve.max_limit`, or input outside the operation's domain
pub fn evaluate(operation: Operation, args: &[i64], config: &IntmathConfig) -> Result<Outcome, OperationError> {
    if args.len() != operation.arity() {
        return Err(OperationError::Arity {
            operation,
            expected: operation.arity(),
            got: args.len(),
        });
    }

    debug!("Evaluating {} {:?} ({})", operation.name(), args, operation.complexity());

    let n = args[0];
    let outcome = match operation {
        Operation::CountDigits => Outcome::Count(u64::from(integer_math::count_digits(n))),
        Operation::IsPalindrome => Outcome::Bool(integer_math::is_palindrome(n)),
        Operation::Divisors => {
            let mut found = integer_math::divisors(Positive::new(n)?);
            if config.output.sort_divisors {
                found.sort_unstable();
            }
            Outcome::List(found)
        }
        Operation::Gcd => Outcome::Count(integer_math::gcd(n, args[1])),
        Operation::Lcm => Outcome::Count(integer_math::lcm(n, args[1])?),
        Operation::IsPrime => Outcome::Bool(integer_math::is_prime(n)),
        Operation::PrimeFactors => Outcome::List(integer_math::prime_factors(Positive::new(n)?)),
        Operation::Primes => {
            if n > config.sieve.max_limit {
                return Err(OperationError::LimitExceeded {
                    requested: n,
                    limit: config.sieve.max_limit,
                });
            }
            Outcome::List(integer_math::primes_up_to(n))
        }
        Operation::Factorial => Outcome::Integer(integer_math::factorial(n)?),
        Operation::TrailingZeros => Outcome::Count(integer_math::trailing_zeros_of_factorial(n)),
    };

    debug!("{} {:?} = {}", operation.name(), args, outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(operation: Operation, args: &[i64]) -> Result<Outcome, OperationError> {
        evaluate(operation, args, &IntmathConfig::default())
    }

    #[test]
    fn test_parse_every_operation() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn test_parse_unknown_operation() {
        let err = "fibonacci".parse::<Operation>().unwrap_err();
        assert!(matches!(err, OperationError::Unknown(ref name) if name == "fibonacci"));
    }

    #[test]
    fn test_arity_is_checked() {
        let err = run(Operation::Gcd, &[12]).unwrap_err();
        assert!(matches!(err, OperationError::Arity { expected: 2, got: 1, .. }));
        assert_eq!(err.to_string(), "`gcd` takes 2 argument(s), got 1");

        let err = run(Operation::IsPrime, &[]).unwrap_err();
        assert!(matches!(err, OperationError::Arity { expected: 1, got: 0, .. }));
    }

    #[test]
    fn test_scalar_outcomes() {
        assert_eq!(run(Operation::CountDigits, &[-12345]).unwrap(), Outcome::Count(5));
        assert_eq!(run(Operation::IsPalindrome, &[12321]).unwrap(), Outcome::Bool(true));
        assert_eq!(run(Operation::Gcd, &[270, 192]).unwrap(), Outcome::Count(6));
        assert_eq!(run(Operation::Lcm, &[14, 18]).unwrap(), Outcome::Count(126));
        assert_eq!(run(Operation::IsPrime, &[97]).unwrap(), Outcome::Bool(true));
        assert_eq!(run(Operation::Factorial, &[5]).unwrap(), Outcome::Integer(120));
        assert_eq!(run(Operation::TrailingZeros, &[1000]).unwrap(), Outcome::Count(249));
    }

    #[test]
    fn test_list_outcomes() {
        assert_eq!(run(Operation::Divisors, &[12]).unwrap(), Outcome::List(vec![1, 2, 3, 4, 6, 12]));
        assert_eq!(run(Operation::PrimeFactors, &[360]).unwrap(), Outcome::List(vec![2, 2, 2, 3, 3, 5]));
        assert_eq!(run(Operation::Primes, &[20]).unwrap(), Outcome::List(vec![2, 3, 5, 7, 11, 13, 17, 19]));
    }

    #[test]
    fn test_unsorted_divisors() {
        let mut config = IntmathConfig::default();
        config.output.sort_divisors = false;
        let outcome = evaluate(Operation::Divisors, &[12], &config).unwrap();
        assert_eq!(outcome, Outcome::List(vec![1, 12, 2, 6, 3, 4]));
    }

    #[test]
    fn test_domain_errors() {
        let err = run(Operation::Factorial, &[-1]).unwrap_err();
        assert!(matches!(err, OperationError::Domain(DomainError::Negative(-1))));

        let err = run(Operation::Divisors, &[0]).unwrap_err();
        assert!(matches!(err, OperationError::Domain(DomainError::NotPositive(0))));

        let err = run(Operation::Factorial, &[21]).unwrap_err();
        assert!(matches!(err, OperationError::Domain(DomainError::Overflow { .. })));
    }

    #[test]
    fn test_sieve_limit() {
        let mut config = IntmathConfig::default();
        config.sieve.max_limit = 1_000;
        assert!(evaluate(Operation::Primes, &[1_000], &config).is_ok());
        let err = evaluate(Operation::Primes, &[1_001], &config).unwrap_err();
        assert!(matches!(err, OperationError::LimitExceeded { requested: 1_001, limit: 1_000 }));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Bool(false).to_string(), "false");
        assert_eq!(Outcome::Integer(-1).to_string(), "-1");
        assert_eq!(Outcome::List(vec![2, 3, 5]).to_string(), "2 3 5");
        assert_eq!(Outcome::List(vec![]).to_string(), "");
    }
}
