//! Tool definition - schema and metadata for a callable tool.

use serde::{Deserialize, Serialize};

/// Definition of a tool exposed over a request/response protocol.
///
/// Contains the schema and documentation needed for:
/// - AI providers (OpenAI/Anthropic tool calling)
/// - Parameter documentation for other callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "analyze_decision")
    name: String,

    /// Human-readable description
    description: String,

    /// JSON Schema for the parameters
    parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameters schema.
    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    /// Returns the names of required parameters.
    pub fn required_parameters(&self) -> Vec<&str> {
        self.parameters_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|names| names.iter().filter_map(|n| n.as_str()).collect())
            .unwrap_or_default()
    }

    /// Converts to OpenAI tool format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema
            }
        })
    }

    /// Converts to Anthropic tool format.
    pub fn to_anthropic_format(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_schema
        })
    }
}
