// src/core/error.rs

use thiserror::Error;

/// Inputs for which an operation has no defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The operation requires n >= 1.
    #[error("expected a positive integer, got {0}")]
    NotPositive(i64),

    /// The operation is undefined for negative input (e.g. factorial).
    #[error("undefined for negative input {0}")]
    Negative(i64),

    /// The exact result does not fit the fixed-width result type.
    #[error("{operation} overflowed the 64-bit result range")]
    Overflow { operation: &'static str },
}
