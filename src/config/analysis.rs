//! Analysis input configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::InputLimits;

/// Bounds on the problem statement accepted at the boundary
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum length in Unicode characters, after trimming
    #[serde(default = "default_min_problem_chars")]
    pub min_problem_chars: usize,

    /// Maximum length in Unicode characters, after trimming
    #[serde(default = "default_max_problem_chars")]
    pub max_problem_chars: usize,
}

impl AnalysisConfig {
    /// Input limits for the analyze handler
    pub fn limits(&self) -> InputLimits {
        InputLimits {
            min_chars: self.min_problem_chars,
            max_chars: self.max_problem_chars,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_problem_chars == 0 {
            return Err(ValidationError::ZeroMinimumLength);
        }
        if self.min_problem_chars > self.max_problem_chars {
            return Err(ValidationError::InvalidLengthBounds {
                min: self.min_problem_chars,
                max: self.max_problem_chars,
            });
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_problem_chars: default_min_problem_chars(),
            max_problem_chars: default_max_problem_chars(),
        }
    }
}

fn default_min_problem_chars() -> usize {
    10
}

fn default_max_problem_chars() -> usize {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.min_problem_chars, 10);
        assert_eq!(config.max_problem_chars, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_limits_match_handler_defaults() {
        assert_eq!(AnalysisConfig::default().limits(), InputLimits::default());
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let config = AnalysisConfig {
            min_problem_chars: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::ZeroMinimumLength));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = AnalysisConfig {
            min_problem_chars: 50,
            max_problem_chars: 20,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLengthBounds { min: 50, max: 20 })
        );
    }
}
