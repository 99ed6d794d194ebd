// src/core/mod.rs

pub mod error;
pub mod positive;

pub use error::DomainError;
pub use positive::Positive;
