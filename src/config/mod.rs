// src/config/mod.rs

pub mod intmath_config;

// Re-export main types for convenience
pub use intmath_config::{IntmathConfig, OutputConfig, OutputFormat, SieveConfig};
