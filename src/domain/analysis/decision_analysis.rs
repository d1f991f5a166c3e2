//! DecisionAnalysis aggregate and the five-stage pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::bias::{BiasDetector, BiasWarnings};
use crate::domain::reframing::{ReframedProblem, Reframer};
use crate::domain::risk::{RiskAnalyzer, RiskRewardAnalysis};
use crate::domain::strategy::{StrategyGenerator, StrategySpace};
use crate::domain::variables::{VariableExtractor, VariablesAndConstraints};

/// The complete structural analysis of one decision problem.
///
/// Fully value-typed: built fresh per request and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionAnalysis {
    pub reframed_problem: ReframedProblem,
    pub variables: VariablesAndConstraints,
    pub strategy_space: StrategySpace,
    pub risk_analysis: Vec<RiskRewardAnalysis>,
    pub biases: BiasWarnings,
}

/// Runs the five stages in order.
///
/// Pure and infallible: input validation belongs to the caller, and every
/// stage has a defined fallback for text that matches nothing.
pub fn analyze(problem_text: &str) -> DecisionAnalysis {
    let reframed_problem = Reframer::reframe(problem_text);
    let variables = VariableExtractor::extract(&reframed_problem);
    let strategy_space = StrategyGenerator::generate(&reframed_problem, &variables);
    let risk_analysis = RiskAnalyzer::analyze(&strategy_space, &variables);
    let biases = BiasDetector::detect(&reframed_problem);

    debug!(
        theme = reframed_problem.theme.label(),
        biases = biases.len(),
        "Decision analysis complete"
    );

    DecisionAnalysis {
        reframed_problem,
        variables,
        strategy_space,
        risk_analysis,
        biases,
    }
}
