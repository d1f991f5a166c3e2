//! Tool execution result.
//!
//! Represents the outcome of a tool invocation: a status and a single
//! message or rendered payload.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::RenderError;

/// Outcome category of a tool execution.
///
/// Nothing behind the tools is remote or time-dependent, so no
/// category is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolResult {
    /// Tool executed successfully
    Success,

    /// Parameters failed validation (e.g., missing problem, too short)
    ValidationError,

    /// No tool with the requested name
    NotFound,

    /// Unexpected error while producing the output
    InternalError,
}

impl ToolResult {
    /// Returns true if the tool executed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns a human-readable description of the result.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Success => "Tool executed successfully",
            Self::ValidationError => "Tool parameters failed validation",
            Self::NotFound => "Tool not found",
            Self::InternalError => "Unexpected error occurred",
        }
    }
}

impl std::fmt::Display for ToolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Status plus content returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub status: ToolResult,
    pub content: String,
}

impl ToolResponse {
    /// Successful response carrying rendered output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            status: ToolResult::Success,
            content: content.into(),
        }
    }

    /// Failed response carrying one error message.
    pub fn error(status: ToolResult, message: impl Into<String>) -> Self {
        Self {
            status,
            content: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.status.is_success()
    }
}

impl From<DomainError> for ToolResponse {
    fn from(err: DomainError) -> Self {
        let status = match err.code {
            ErrorCode::UnknownTool => ToolResult::NotFound,
            code if code.is_client_error() => ToolResult::ValidationError,
            _ => ToolResult::InternalError,
        };
        ToolResponse::error(status, err.to_string())
    }
}

impl From<RenderError> for ToolResponse {
    fn from(err: RenderError) -> Self {
        DomainError::from(err).into()
    }
}
