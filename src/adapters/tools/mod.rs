//! Tool adapters - the request/response boundary around the pipeline.

mod analyze_decision;
mod tool_definition;
mod tool_result;

pub use analyze_decision::{AnalyzeDecisionParams, AnalyzeDecisionTool, ANALYZE_DECISION};
pub use tool_definition::ToolDefinition;
pub use tool_result::{ToolResponse, ToolResult};
