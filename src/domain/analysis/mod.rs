//! Analysis - the pipeline that assembles a `DecisionAnalysis`.
//!
//! Data flows strictly forward: reframing feeds extraction, extraction
//! feeds strategy generation, both feed risk analysis, and bias detection
//! reads the reframed problem. Each stage is a pure function of its inputs.

mod decision_analysis;

pub use decision_analysis::{analyze, DecisionAnalysis};
