// src/lib.rs

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod core;
pub mod integer_math;
