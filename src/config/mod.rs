//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_LENS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_lens::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Output format: {}", config.output.format);
//! ```

mod analysis;
mod error;
mod logging;
mod output;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use output::OutputConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Problem statement bounds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output format
    #[serde(default)]
    pub output: OutputConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_LENS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_LENS__ANALYSIS__MIN_PROBLEM_CHARS=20` -> `analysis.min_problem_chars = 20`
    /// - `DECISION_LENS__OUTPUT__FORMAT=json` -> `output.format = json`
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
                    .prefix("DECISION_LENS")
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
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
