//! The `analyze_decision` tool.
//!
//! Parses request parameters, runs the handler and renders the analysis
//! as text or structured data. Every failure becomes one error message.

use serde::Deserialize;
use tracing::{debug, warn};

use super::{ToolDefinition, ToolResponse};
use crate::adapters::rendering::renderer_for;
use crate::application::{AnalyzeDecisionCommand, AnalyzeDecisionHandler};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::RenderFormat;

/// Name under which the tool is exposed.
pub const ANALYZE_DECISION: &str = "analyze_decision";

/// Parameters accepted by `analyze_decision`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeDecisionParams {
    /// Free-form description of the decision problem.
    pub problem: String,

    /// Overrides the tool's default output format.
    #[serde(default)]
    pub format: Option<RenderFormat>,
}

/// Tool boundary in front of the analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeDecisionTool {
    handler: AnalyzeDecisionHandler,
    default_format: RenderFormat,
}

impl AnalyzeDecisionTool {
    pub fn new(handler: AnalyzeDecisionHandler, default_format: RenderFormat) -> Self {
        Self {
            handler,
            default_format,
        }
    }

    /// Schema and metadata for tool-calling clients.
    pub fn definition(&self) -> ToolDefinition {
        let limits = self.handler.limits();
        ToolDefinition::new(
            ANALYZE_DECISION,
            "Break a personal decision problem into a neutral restatement, goals, \
             variables and constraints, four strategies with outcome distributions, \
             and cognitive bias warnings.",
            serde_json::json!({
                "type": "object",
                "required": ["problem"],
                "properties": {
                    "problem": {
                        "type": "string",
                        "description": "The decision problem in the user's own words",
                        "minLength": limits.min_chars,
                        "maxLength": limits.max_chars
                    },
                    "format": {
                        "type": "string",
                        "enum": ["text", "json", "json_pretty"],
                        "default": self.default_format.as_str()
                    }
                }
            }),
        )
    }

    /// Dispatches a call by tool name.
    pub fn call(&self, name: &str, params: serde_json::Value) -> ToolResponse {
        if name != ANALYZE_DECISION {
            warn!(tool = name, "Unknown tool requested");
            return DomainError::new(ErrorCode::UnknownTool, format!("Tool '{}' not found", name))
                .with_detail("tool", name)
                .into();
        }
        self.execute(params)
    }

    /// Runs the tool with raw JSON parameters.
    pub fn execute(&self, params: serde_json::Value) -> ToolResponse {
        let params: AnalyzeDecisionParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(err) => {
                warn!(error = %err, "Invalid tool parameters");
                return DomainError::validation("params", format!("Invalid parameters: {}", err))
                    .into();
            }
        };
        self.run(params)
    }

    /// Runs the tool with typed parameters.
    pub fn run(&self, params: AnalyzeDecisionParams) -> ToolResponse {
        let format = params.format.unwrap_or(self.default_format);

        let analysis = match self.handler.handle(AnalyzeDecisionCommand::new(params.problem)) {
            Ok(analysis) => analysis,
            Err(err) => return err.into(),
        };

        match renderer_for(format).render(&analysis) {
            Ok(content) => {
                debug!(tool = ANALYZE_DECISION, format = %format, "Tool executed");
                ToolResponse::success(content)
            }
            Err(err) => err.into(),
        }
    }
}
