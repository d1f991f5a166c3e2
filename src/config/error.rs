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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Minimum problem length must be at least 1 character")]
    ZeroMinimumLength,

    #[error("Minimum problem length ({min}) exceeds maximum ({max})")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("Log level filter cannot be empty")]
    EmptyLogLevel,
}
