//! Application handlers.
//!
//! Command handlers that sit between the boundary and the domain pipeline.

mod analyze_decision;

pub use analyze_decision::{AnalyzeDecisionCommand, AnalyzeDecisionHandler, InputLimits};
