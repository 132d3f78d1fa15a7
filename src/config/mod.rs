//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHOICE_COMPARE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use choice_compare::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("New constraints start at {}", config.comparison.default_soft_penalty);
//! ```

mod comparison;
mod error;
mod logging;

pub use comparison::{ComparisonConfig, IdStrategy};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Comparison defaults
    #[serde(default)]
    pub comparison: ComparisonConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHOICE_COMPARE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CHOICE_COMPARE__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `CHOICE_COMPARE__COMPARISON__DEFAULT_SOFT_PENALTY=-5` -> `comparison.default_soft_penalty = -5.0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHOICE_COMPARE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.comparison.validate()?;
        Ok(())
    }
}
