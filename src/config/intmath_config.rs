// src/config/intmath_config.rs

use serde::{Deserialize, Serialize};
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Configuration for the `intmath` command line front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntmathConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Result rendering
    pub output: OutputConfig,

    /// Sieve resource limits
    pub sieve: SieveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// plain or json (default: plain)
    pub format: OutputFormat,

    /// Print divisors in ascending order instead of discovery order (default: true)
    pub sort_divisors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Largest bound accepted by the `primes` operation (default: 100,000,000)
    pub max_limit: i64,
}

impl Default for IntmathConfig {
    fn default() -> Self {
        IntmathConfig {
            log_level: "info".to_string(),
            output: OutputConfig::default(),
            sieve: SieveConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Plain,
            sort_divisors: true,
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            max_limit: 100_000_000,
        }
    }
}

impl IntmathConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("intmath.toml").exists() {
            builder = builder.add_source(File::with_name("intmath.toml"));
        } else if Path::new("intmath.yaml").exists() {
            builder = builder.add_source(File::with_name("intmath.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("output.format", "plain")?
            .set_default("output.sort_divisors", true)?
            .set_default("sieve.max_limit", 100_000_000i64)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // INTMATH_LOG_LEVEL, INTMATH_SIEVE__MAX_LIMIT, ...
        let config = builder
            .add_source(
                Environment::with_prefix("INTMATH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
