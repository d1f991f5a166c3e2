//! Analysis Renderer Port - projection of an analysis into a string.
//!
//! The pipeline's result is consumed either as formatted text or as raw
//! structured data. Adapters (`TemplateAnalysisRenderer`,
//! `JsonAnalysisRenderer`) provide the implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::analysis::DecisionAnalysis;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Port for rendering a finished analysis.
///
/// # Contract
///
/// Implementations must:
/// - Be pure, order-preserving projections of the data model
/// - Produce identical output for identical input
/// - Never drop a section, strategy, distribution or bias
pub trait AnalysisRenderer: Send + Sync {
    /// Renders the full analysis.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the output cannot be produced.
    fn render(&self, analysis: &DecisionAnalysis) -> Result<String, RenderError>;

    /// The format this renderer produces.
    fn format(&self) -> RenderFormat;
}

/// Output format variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    /// Fixed human-readable layout with five numbered sections.
    #[default]
    Text,

    /// Raw structured data on one line.
    Json,

    /// Raw structured data, indented.
    JsonPretty,
}

impl RenderFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Text => "text",
            RenderFormat::Json => "json",
            RenderFormat::JsonPretty => "json_pretty",
        }
    }

    /// True for the structured-data formats.
    pub fn is_structured(&self) -> bool {
        !matches!(self, RenderFormat::Text)
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RenderFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "markdown" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            "json_pretty" | "json-pretty" | "pretty" => Ok(RenderFormat::JsonPretty),
            other => Err(ValidationError::invalid_format(
                "format",
                format!("unknown value '{}'", other),
            )),
        }
    }
}

/// Errors that can occur while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Structured serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<RenderError> for DomainError {
    fn from(err: RenderError) -> Self {
        DomainError::new(ErrorCode::RenderFailed, err.to_string())
    }
}
