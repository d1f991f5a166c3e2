//! Integration tests for the `analyze_decision` tool boundary.
//!
//! These tests verify:
//! 1. The tool definition exports in both provider formats
//! 2. Input rejection never reaches the pipeline
//! 3. Successful calls return the requested projection

use serde_json::{json, Value};

use decision_lens::adapters::tools::{AnalyzeDecisionTool, ToolResult, ANALYZE_DECISION};
use decision_lens::application::{AnalyzeDecisionHandler, InputLimits};
use decision_lens::ports::RenderFormat;

fn tool(format: RenderFormat) -> AnalyzeDecisionTool {
    AnalyzeDecisionTool::new(AnalyzeDecisionHandler::new(InputLimits::default()), format)
}

// =============================================================================
// Definition
// =============================================================================

#[test]
fn definition_exports_to_provider_formats() {
    let def = tool(RenderFormat::Text).definition();

    let openai = def.to_openai_format();
    assert_eq!(openai["function"]["name"], ANALYZE_DECISION);

    let anthropic = def.to_anthropic_format();
    assert_eq!(anthropic["input_schema"]["required"], json!(["problem"]));
    assert_eq!(anthropic["input_schema"]["properties"]["format"]["default"], "text");
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn empty_problem_is_rejected_with_single_message() {
    let response = tool(RenderFormat::Text).execute(json!({ "problem": "   " }));
    assert_eq!(response.status, ToolResult::ValidationError);
    assert_eq!(response.content, "[EMPTY_FIELD] Field 'problem' cannot be empty");
}

#[test]
fn too_short_problem_is_rejected() {
    let response = tool(RenderFormat::Text).execute(json!({ "problem": "辞职吗" }));
    assert_eq!(response.status, ToolResult::ValidationError);
    assert!(response.is_error());
}

#[test]
fn unexpected_parameters_are_rejected() {
    let response = tool(RenderFormat::Text).execute(json!({
        "problem": "Should I move to Lisbon next year?",
        "verbose": true
    }));
    assert_eq!(response.status, ToolResult::ValidationError);
}

#[test]
fn custom_limits_apply() {
    let strict = AnalyzeDecisionTool::new(
        AnalyzeDecisionHandler::new(InputLimits {
            min_chars: 50,
            max_chars: 100,
        }),
        RenderFormat::Text,
    );
    let response = strict.execute(json!({ "problem": "Should I move to Lisbon next year?" }));
    assert_eq!(response.status, ToolResult::ValidationError);
}

// =============================================================================
// Success
// =============================================================================

#[test]
fn json_default_returns_structured_data() {
    let response = tool(RenderFormat::Json).execute(json!({
        "problem": "我很焦虑，到底要不要辞职创业，已经投入了两年时间，感觉大家都在卷"
    }));
    assert!(response.status.is_success());

    let value: Value = serde_json::from_str(&response.content).unwrap();
    assert_eq!(value["reframed_problem"]["theme"], "career_development");
    let biases: Vec<&str> = value["biases"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|b| b["type"].as_str())
        .collect();
    assert!(biases.contains(&"sunk_cost"));
    assert!(biases.contains(&"group_pressure"));
}

#[test]
fn call_dispatches_by_name() {
    let t = tool(RenderFormat::Text);
    let ok = t.call(ANALYZE_DECISION, json!({ "problem": "Should I move to Lisbon next year?" }));
    assert!(ok.status.is_success());

    let missing = t.call("unknown", json!({}));
    assert_eq!(missing.status, ToolResult::NotFound);
}
