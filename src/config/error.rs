//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Log filter cannot be empty")]
    EmptyLogFilter,

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),

    #[error("Default soft penalty must be zero or negative (got {0})")]
    PositiveDefaultPenalty(f64),
}
