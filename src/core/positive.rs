// src/core/positive.rs

use std::fmt;
use crate::core::error::DomainError;

/// An `i64` known to be at least 1.
///
/// Divisor enumeration and prime factorization are only meaningful for
/// positive input, so they take this wrapper instead of a bare integer and
/// the check happens once, at construction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive(i64);

impl Positive {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value >= 1 {
            Ok(Positive(value))
        } else {
            Err(DomainError::NotPositive(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Positive {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Positive::new(value)
    }
}

impl From<Positive> for i64 {
    fn from(n: Positive) -> i64 {
        n.0
    }
}

impl fmt::Display for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Positive({})", self.0)
    }
}
