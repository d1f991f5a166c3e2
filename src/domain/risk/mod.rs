//! Risk - heuristic outcome distributions per strategy archetype.

mod analyzer;
pub mod templates;

pub use analyzer::{
    adjust_for_uncertainty, normalize, uncertainty_level, OutcomeDistribution, RiskAnalyzer,
    RiskRewardAnalysis, MAX_BUCKET, MIN_BUCKET, UNCERTAINTY_SATURATION,
};
pub use templates::{OutcomeBucket, RiskTemplateTable, GENERIC_TEMPLATE, RISK_TEMPLATES};
