//! AnalyzeDecision - Command handler running the analysis pipeline.
//!
//! Input rejection happens here, before the pure pipeline is reached.

use tracing::{debug, warn};

use crate::domain::analysis::{analyze, DecisionAnalysis};
use crate::domain::foundation::{DomainError, ValidationError};

/// Bounds applied to the problem statement, in Unicode characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_chars: 10,
            max_chars: 10_000,
        }
    }
}

/// Command to analyze one decision problem.
#[derive(Debug, Clone)]
pub struct AnalyzeDecisionCommand {
    pub problem: String,
}

impl AnalyzeDecisionCommand {
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
        }
    }
}

/// Handler for analyzing a decision problem.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeDecisionHandler {
    limits: InputLimits,
}

impl AnalyzeDecisionHandler {
    pub fn new(limits: InputLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> InputLimits {
        self.limits
    }

    /// Validates the problem statement and runs the pipeline on its trimmed text.
    pub fn handle(&self, cmd: AnalyzeDecisionCommand) -> Result<DecisionAnalysis, DomainError> {
        let problem = self.validate(&cmd.problem).map_err(|err| {
            warn!(error = %err, "Rejected problem statement");
            DomainError::from(err)
        })?;

        debug!(chars = problem.chars().count(), "Analyzing decision problem");
        Ok(analyze(problem))
    }

    /// Returns the trimmed statement if it is within the configured bounds.
    pub fn validate<'a>(&self, problem: &'a str) -> Result<&'a str, ValidationError> {
        let trimmed = problem.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("problem"));
        }

        let chars = trimmed.chars().count();
        if chars < self.limits.min_chars || chars > self.limits.max_chars {
            return Err(ValidationError::out_of_range(
                "problem",
                self.limits.min_chars,
                self.limits.max_chars,
                chars,
            ));
        }

        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> AnalyzeDecisionHandler {
        AnalyzeDecisionHandler::default()
    }

    #[test]
    fn valid_problem_is_analyzed() {
        let analysis = handler()
            .handle(AnalyzeDecisionCommand::new("Should I accept the job offer in Berlin?"))
            .unwrap();
        assert_eq!(analysis.strategy_space.len(), 4);
    }

    #[test]
    fn whitespace_only_problem_is_rejected_as_empty() {
        let err = handler()
            .handle(AnalyzeDecisionCommand::new("   \n\t "))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field"), Some(&"problem".to_string()));
    }

    #[test]
    fn short_problem_is_rejected() {
        let err = handler()
            .handle(AnalyzeDecisionCommand::new("quit?"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(err.code.is_client_error());
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // Eleven CJK characters, thirty-three bytes.
        let problem = "要不要辞职去读研究生呢";
        assert!(handler().validate(problem).is_ok());
        assert!(handler().validate("要不要辞职").is_err());
    }

    #[test]
    fn overlong_problem_is_rejected() {
        let handler = AnalyzeDecisionHandler::new(InputLimits {
            min_chars: 1,
            max_chars: 20,
        });
        let err = handler.validate(&"a".repeat(21)).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("problem", 1, 20, 21));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_analysis() {
        let analysis = handler()
            .handle(AnalyzeDecisionCommand::new("  Should I move to Shanghai?  "))
            .unwrap();
        assert_eq!(analysis.reframed_problem.original, "Should I move to Shanghai?");
    }
}
