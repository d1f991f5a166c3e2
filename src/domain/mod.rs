//! Domain layer containing the analysis pipeline and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (probability, keyword buffer, errors)
//! - `reframing` - Loaded-language detection and neutral restatement
//! - `variables` - Goals, key variables, hard constraints, uncertainties
//! - `strategy` - The fixed four-member strategy space
//! - `risk` - Heuristic outcome distributions per strategy
//! - `bias` - Cognitive-bias warnings
//! - `analysis` - The `DecisionAnalysis` aggregate and pipeline entry point

pub mod analysis;
pub mod bias;
pub mod foundation;
pub mod reframing;
pub mod risk;
pub mod strategy;
pub mod variables;
