//! Risk Analyzer - heuristic outcome distributions per strategy.
//!
//! The distributions are not statistically calibrated. They encode a
//! baseline shape per archetype, widened toward the extremes as the number
//! of identified uncertainty sources grows.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::{Probability, ValidationError};
use crate::domain::strategy::{StrategyId, StrategySpace, StrategyType};
use crate::domain::variables::VariablesAndConstraints;

use super::templates::{OutcomeBucket, RiskTemplateTable, GENERIC_TEMPLATE, RISK_TEMPLATES};

/// Uncertainty count at which the adjustment saturates.
pub const UNCERTAINTY_SATURATION: usize = 4;

/// Probability bounds applied before normalization.
pub const MIN_BUCKET: f64 = 5.0;
pub const MAX_BUCKET: f64 = 50.0;

/// Shift applied at full uncertainty.
const MIDDLE_SHIFT: f64 = 5.0;
const TAIL_SHIFT: f64 = 2.5;

/// One qualitative outcome and its probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub probability: Probability,
    pub description: String,
}

/// Outcome distribution of one strategy. Probabilities sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRewardAnalysis {
    pub strategy_id: StrategyId,
    pub strategy_name: String,
    pub strategy_type: StrategyType,
    pub distributions: Vec<OutcomeDistribution>,
}

impl RiskRewardAnalysis {
    /// Sum of all bucket probabilities.
    pub fn total(&self) -> u32 {
        self.distributions
            .iter()
            .map(|d| u32::from(d.probability.value()))
            .sum()
    }
}

/// Maps an uncertainty count to a level in [0, 1].
pub fn uncertainty_level(uncertainty_count: usize) -> f64 {
    (uncertainty_count as f64 / UNCERTAINTY_SATURATION as f64).min(1.0)
}

/// Moves weight out of the two middle buckets (indices 1 and 2) into the
/// others, then clamps each weight to `[MIN_BUCKET, MAX_BUCKET]`.
pub fn adjust_for_uncertainty(weights: &[f64], level: f64) -> Vec<f64> {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let shifted = if i == 1 || i == 2 {
                w - MIDDLE_SHIFT * level
            } else {
                w + TAIL_SHIFT * level
            };
            shifted.clamp(MIN_BUCKET, MAX_BUCKET)
        })
        .collect()
}

/// Rescales weights to whole percents summing to exactly 100.
///
/// Each bucket is `round(w / sum * 100)`. Independent rounding can leave the
/// total at 99 or 101; the remainder is applied to the largest bucket (the
/// first one on ties).
pub fn normalize(weights: &[f64]) -> Vec<Probability> {
    let sum: f64 = weights.iter().sum();
    if weights.is_empty() || sum <= 0.0 {
        return Vec::new();
    }

    let mut rounded: Vec<i32> = weights
        .iter()
        .map(|w| (w / sum * 100.0).round() as i32)
        .collect();

    let remainder = 100 - rounded.iter().sum::<i32>();
    if remainder != 0 {
        let largest = rounded
            .iter()
            .enumerate()
            .fold(0, |best, (i, v)| if *v > rounded[best] { i } else { best });
        rounded[largest] += remainder;
    }

    rounded.into_iter().map(to_probability).collect()
}

/// Checks a normalized bucket against the 0-100 range, clamping with a
/// warning when it falls outside.
fn to_probability(percent: i32) -> Probability {
    u8::try_from(percent)
        .map_err(|_| {
            ValidationError::out_of_range("probability", 0, 100, percent.unsigned_abs() as usize)
        })
        .and_then(Probability::try_new)
        .unwrap_or_else(|err| {
            warn!(percent, error = %err, "Bucket outside 0-100 after normalization");
            Probability::new(percent.clamp(0, 100) as u8)
        })
}

/// Stateless risk analysis service.
pub struct RiskAnalyzer;

impl RiskAnalyzer {
    /// Computes one distribution per strategy, preserving input order.
    ///
    /// Reads only the number of identified uncertainties, never their
    /// content. The default uncertainty set counts as zero.
    pub fn analyze(
        space: &StrategySpace,
        variables: &VariablesAndConstraints,
    ) -> Vec<RiskRewardAnalysis> {
        Self::analyze_with(RISK_TEMPLATES, space, variables.identified_uncertainty_count())
    }

    /// Same as [`RiskAnalyzer::analyze`] against an explicit template table.
    pub fn analyze_with(
        table: RiskTemplateTable,
        space: &StrategySpace,
        uncertainty_count: usize,
    ) -> Vec<RiskRewardAnalysis> {
        let level = uncertainty_level(uncertainty_count);
        debug!(uncertainty_count, level, "Computing outcome distributions");

        space
            .strategies()
            .iter()
            .map(|strategy| {
                let buckets = Self::template_for(table, strategy.strategy_type);
                RiskRewardAnalysis {
                    strategy_id: strategy.id,
                    strategy_name: strategy.name.clone(),
                    strategy_type: strategy.strategy_type,
                    distributions: Self::distribution(buckets, level),
                }
            })
            .collect()
    }

    /// Looks up the base buckets of an archetype, falling back to the
    /// generic three-bucket template.
    pub fn template_for(
        table: RiskTemplateTable,
        strategy_type: StrategyType,
    ) -> &'static [OutcomeBucket] {
        match table.iter().find(|(t, _)| *t == strategy_type) {
            Some((_, buckets)) => *buckets,
            None => {
                warn!(strategy_type = ?strategy_type, "No risk template, using generic distribution");
                GENERIC_TEMPLATE
            }
        }
    }

    /// Adjusts and normalizes a bucket list at the given uncertainty level.
    pub fn distribution(buckets: &[OutcomeBucket], level: f64) -> Vec<OutcomeDistribution> {
        let weights: Vec<f64> = buckets.iter().map(|b| b.weight).collect();
        let probabilities = normalize(&adjust_for_uncertainty(&weights, level));

        buckets
            .iter()
            .zip(probabilities)
            .map(|(bucket, probability)| OutcomeDistribution {
                probability,
                description: bucket.description.to_string(),
            })
            .collect()
    }
}
