//! Strategy Generator - instantiates the fixed four-member strategy space.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::ValidationError;
use crate::domain::reframing::ReframedProblem;
use crate::domain::variables::VariablesAndConstraints;

use super::{StrategyId, StrategyType};

/// An alternative action archetype, elaborated for one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: StrategyId,
    pub name: String,
    #[serde(rename = "type")]
    pub strategy_type: StrategyType,
    pub type_label: String,
    pub preconditions: Vec<String>,
    pub trigger_points: Vec<String>,
    pub execution_cost: String,
    pub worst_case: String,
}

/// Exactly one strategy per archetype, in A-D order.
///
/// Deserialization rejects any other shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedStrategySpace")]
pub struct StrategySpace {
    strategies: Vec<Strategy>,
}

#[derive(Deserialize)]
struct UncheckedStrategySpace {
    strategies: Vec<Strategy>,
}

impl TryFrom<UncheckedStrategySpace> for StrategySpace {
    type Error = ValidationError;

    fn try_from(unchecked: UncheckedStrategySpace) -> Result<Self, Self::Error> {
        let strategies = unchecked.strategies;
        let complete = strategies.len() == StrategyType::ALL.len()
            && strategies
                .iter()
                .zip(StrategyType::ALL)
                .all(|(s, t)| s.strategy_type == t && s.id == t.id());

        if !complete {
            return Err(ValidationError::invalid_format(
                "strategies",
                "expected one strategy per type with ids A-D in order",
            ));
        }
        Ok(Self { strategies })
    }
}

impl StrategySpace {
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Finds the strategy of an archetype.
    pub fn get(&self, strategy_type: StrategyType) -> Option<&Strategy> {
        self.strategies
            .iter()
            .find(|s| s.strategy_type == strategy_type)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

/// A line added only when a given label was extracted.
#[derive(Debug, Clone, Copy)]
pub struct ConditionalLine {
    /// Key-variable or uncertainty label that enables the line.
    pub when_present: &'static str,
    pub text: &'static str,
}

/// Configuration record for one archetype.
#[derive(Debug, Clone, Copy)]
pub struct StrategyTemplate {
    pub strategy_type: StrategyType,
    pub name: &'static str,
    pub preconditions: [&'static str; 3],
    /// Keyed on a key-variable label.
    pub extra_precondition: ConditionalLine,
    pub execution_costs: &'static [&'static str],
    pub trigger_points: [&'static str; 3],
    /// Keyed on an uncertainty label.
    pub extra_trigger: ConditionalLine,
    pub worst_case: &'static str,
}

const AGGRESSIVE: StrategyTemplate = StrategyTemplate {
    strategy_type: StrategyType::Aggressive,
    name: "Full commitment",
    preconditions: [
        "A clear, measurable definition of what success looks like",
        "The whole committed stake could be lost without endangering basic living costs",
        "Willingness to tolerate sharp short-term swings in results",
    ],
    extra_precondition: ConditionalLine {
        when_present: "capital reserve",
        text: "A capital reserve covering at least 12 months of living costs is set aside before committing",
    },
    execution_costs: &[
        "Financial: most available resources committed up front",
        "Time: full-time effort for an extended period",
        "Psychological: sustained high pressure and exposure",
        "Opportunity: other paths are put on hold",
    ],
    trigger_points: [
        "A pre-set milestone is missed twice in a row: reassess the scope",
        "Committed resources fall to the pre-set stop-loss line: stop adding more",
        "Clear traction appears: scale the commitment deliberately",
    ],
    extra_trigger: ConditionalLine {
        when_present: "market volatility",
        text: "The relevant market turns down sharply for two consecutive quarters: re-run this analysis",
    },
    worst_case: "The committed stake is lost, recovery takes one to three years, and the \
                 abandoned fallback paths are harder to re-enter.",
};

const CONSERVATIVE: StrategyTemplate = StrategyTemplate {
    strategy_type: StrategyType::Conservative,
    name: "Stay the course",
    preconditions: [
        "The current situation is still acceptable on the goals that matter most",
        "The reasons for dissatisfaction are understood and named",
        "A review date is fixed so that staying remains a choice rather than a default",
    ],
    extra_precondition: ConditionalLine {
        when_present: "opportunity cost",
        text: "The opportunity being passed over is written down with an estimate of its value",
    },
    execution_costs: &[
        "Financial: low direct cost",
        "Time: little extra effort beyond the current routine",
        "Psychological: possible lingering regret and restlessness",
    ],
    trigger_points: [
        "The review date arrives: repeat this analysis with fresh information",
        "Dissatisfaction persists or grows for three months: move to the hedge strategy",
        "An outside option appears that clearly beats the current one on the main goals",
    ],
    extra_trigger: ConditionalLine {
        when_present: "income stability",
        text: "Current income becomes unstable: the safety of staying can no longer be assumed",
    },
    worst_case: "Conditions slowly deteriorate while the window for the alternative closes, \
                 leaving the same dilemma with fewer options.",
};

const HEDGE: StrategyTemplate = StrategyTemplate {
    strategy_type: StrategyType::Hedge,
    name: "Parallel trial",
    preconditions: [
        "The main commitment can continue while a small trial runs alongside",
        "The trial has a fixed budget and a fixed end date",
        "Success criteria for the trial are defined before it starts",
    ],
    extra_precondition: ConditionalLine {
        when_present: "time investment",
        text: "Enough spare hours each week are available to run the trial without burning out",
    },
    execution_costs: &[
        "Financial: a small, capped budget",
        "Time: evenings and weekends for a defined period",
        "Energy: risk of spreading attention too thin",
        "Coordination: two tracks to keep in balance",
    ],
    trigger_points: [
        "The trial meets its success criteria: scale toward full commitment",
        "The trial misses its criteria at the end date: close it and keep the lessons",
        "The double load harms health or core performance: cut the trial scope",
    ],
    extra_trigger: ConditionalLine {
        when_present: "outcome timing",
        text: "No clear signal by the end date: extend once, then decide without waiting further",
    },
    worst_case: "Both tracks suffer from divided attention, the trial ends inconclusive, and \
                 effort is spent without producing a clear answer.",
};

const EXIT: StrategyTemplate = StrategyTemplate {
    strategy_type: StrategyType::Exit,
    name: "Step back and reset",
    preconditions: [
        "Leaving the current path does not breach any hard constraint",
        "A minimal plan covers living costs during the reset period",
        "Stepping back is a considered choice, not only a reaction to stress",
    ],
    extra_precondition: ConditionalLine {
        when_present: "social support",
        text: "People close to you know the plan and can offer practical support during the transition",
    },
    execution_costs: &[
        "Financial: income may pause or drop during the reset",
        "Social: explaining the change to others",
        "Psychological: uncertainty about identity and direction",
    ],
    trigger_points: [
        "The reset period ends: choose a new direction with this analysis as input",
        "Savings fall below the pre-set floor: take up interim work",
        "A clearer direction emerges earlier: end the reset early",
    ],
    extra_trigger: ConditionalLine {
        when_present: "external support",
        text: "Expected support falls away: shorten the reset and secure income first",
    },
    worst_case: "The reset drags on without a new direction, resources run down, and re-entry \
                 happens from a weaker position.",
};

impl StrategyTemplate {
    /// Returns the configuration record of an archetype.
    pub fn for_type(strategy_type: StrategyType) -> &'static StrategyTemplate {
        match strategy_type {
            StrategyType::Aggressive => &AGGRESSIVE,
            StrategyType::Conservative => &CONSERVATIVE,
            StrategyType::Hedge => &HEDGE,
            StrategyType::Exit => &EXIT,
        }
    }

    /// Instantiates the template against the extracted variables.
    pub fn instantiate(&self, variables: &VariablesAndConstraints) -> Strategy {
        let mut preconditions: Vec<String> =
            self.preconditions.iter().map(|p| p.to_string()).collect();
        if variables.has_key_variable(self.extra_precondition.when_present) {
            preconditions.push(self.extra_precondition.text.to_string());
        }

        let mut trigger_points: Vec<String> =
            self.trigger_points.iter().map(|t| t.to_string()).collect();
        if variables.has_uncertainty(self.extra_trigger.when_present) {
            trigger_points.push(self.extra_trigger.text.to_string());
        }

        Strategy {
            id: self.strategy_type.id(),
            name: self.name.to_string(),
            strategy_type: self.strategy_type,
            type_label: self.strategy_type.label().to_string(),
            preconditions,
            trigger_points,
            execution_cost: self.execution_costs.join("; "),
            worst_case: self.worst_case.to_string(),
        }
    }
}

/// Stateless strategy generation service.
pub struct StrategyGenerator;

impl StrategyGenerator {
    /// Generates the four-member strategy space.
    ///
    /// Output depends only on archetype and on the presence of specific
    /// key-variable and uncertainty labels. The reframed problem is part of
    /// the contract but no template currently reads it.
    pub fn generate(
        _problem: &ReframedProblem,
        variables: &VariablesAndConstraints,
    ) -> StrategySpace {
        let strategies: Vec<Strategy> = StrategyType::ALL
            .iter()
            .map(|t| StrategyTemplate::for_type(*t).instantiate(variables))
            .collect();

        debug!(
            strategies = strategies.len(),
            capital_reserve = variables.has_key_variable("capital reserve"),
            "Generated strategy space"
        );

        StrategySpace { strategies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reframing::Reframer;
    use crate::domain::variables::VariableExtractor;

    fn variables(key_variables: &[&str], uncertainties: &[&str]) -> VariablesAndConstraints {
        VariablesAndConstraints {
            goals: vec!["career growth".to_string()],
            key_variables: key_variables.iter().map(|s| s.to_string()).collect(),
            hard_constraints: vec!["financial obligations".to_string()],
            uncertainties: uncertainties.iter().map(|s| s.to_string()).collect(),
            defaulted: Vec::new(),
        }
    }

    fn generate(vars: &VariablesAndConstraints) -> StrategySpace {
        StrategyGenerator::generate(&Reframer::reframe("要不要辞职创业"), vars)
    }

    #[test]
    fn space_has_one_strategy_per_type_in_order() {
        let space = generate(&variables(&["time investment"], &["market volatility"]));
        assert_eq!(space.len(), 4);
        let pairs: Vec<_> = space
            .strategies()
            .iter()
            .map(|s| (s.id, s.strategy_type))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (StrategyId::A, StrategyType::Aggressive),
                (StrategyId::B, StrategyType::Conservative),
                (StrategyId::C, StrategyType::Hedge),
                (StrategyId::D, StrategyType::Exit),
            ]
        );
    }

    #[test]
    fn baseline_has_three_preconditions_and_three_triggers() {
        let space = generate(&variables(&["available resources"], &["incomplete information"]));
        for s in space.strategies() {
            assert_eq!(s.preconditions.len(), 3, "{}", s.name);
            assert_eq!(s.trigger_points.len(), 3, "{}", s.name);
        }
    }

    #[test]
    fn capital_reserve_adds_aggressive_precondition() {
        let space = generate(&variables(&["capital reserve"], &["incomplete information"]));
        let aggressive = space.get(StrategyType::Aggressive).unwrap();
        assert_eq!(aggressive.preconditions.len(), 4);
        assert!(aggressive.preconditions[3].contains("capital reserve"));
        // Other archetypes are unaffected.
        assert_eq!(space.get(StrategyType::Hedge).unwrap().preconditions.len(), 3);
    }

    #[test]
    fn uncertainty_labels_add_trigger_points() {
        let space = generate(&variables(
            &["available resources"],
            &["market volatility", "outcome timing"],
        ));
        assert_eq!(space.get(StrategyType::Aggressive).unwrap().trigger_points.len(), 4);
        assert_eq!(space.get(StrategyType::Hedge).unwrap().trigger_points.len(), 4);
        assert_eq!(space.get(StrategyType::Conservative).unwrap().trigger_points.len(), 3);
        assert_eq!(space.get(StrategyType::Exit).unwrap().trigger_points.len(), 3);
    }

    #[test]
    fn execution_cost_is_semicolon_joined() {
        let space = generate(&variables(&["available resources"], &["incomplete information"]));
        for s in space.strategies() {
            let parts = s.execution_cost.split("; ").count();
            assert!((3..=4).contains(&parts), "{} has {} cost parts", s.name, parts);
        }
    }

    #[test]
    fn every_type_has_a_distinct_worst_case() {
        let space = generate(&variables(&["available resources"], &["incomplete information"]));
        let mut worst: Vec<_> = space.strategies().iter().map(|s| s.worst_case.clone()).collect();
        worst.sort();
        worst.dedup();
        assert_eq!(worst.len(), 4);
    }

    #[test]
    fn type_label_matches_type() {
        let space = generate(&variables(&["available resources"], &["incomplete information"]));
        for s in space.strategies() {
            assert_eq!(s.type_label, s.strategy_type.label());
        }
    }

    #[test]
    fn generation_from_extracted_variables_is_deterministic() {
        let problem = Reframer::reframe("存款不多，市场也不稳定，要不要创业");
        let vars = VariableExtractor::extract(&problem);
        assert_eq!(
            StrategyGenerator::generate(&problem, &vars),
            StrategyGenerator::generate(&problem, &vars)
        );
    }

    #[test]
    fn space_deserializes_when_complete() {
        let space = generate(&variables(&["time investment"], &["outcome timing"]));
        let json = serde_json::to_string(&space).unwrap();
        let back: StrategySpace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, space);
    }

    #[test]
    fn space_with_missing_strategy_is_rejected() {
        let space = generate(&variables(&["time investment"], &["outcome timing"]));
        let mut json = serde_json::to_value(&space).unwrap();
        json["strategies"].as_array_mut().unwrap().pop();

        let err = serde_json::from_value::<StrategySpace>(json).unwrap_err();
        assert!(err.to_string().contains("one strategy per type"));
    }

    #[test]
    fn space_with_reordered_strategies_is_rejected() {
        let space = generate(&variables(&["time investment"], &["outcome timing"]));
        let mut json = serde_json::to_value(&space).unwrap();
        json["strategies"].as_array_mut().unwrap().swap(0, 3);

        assert!(serde_json::from_value::<StrategySpace>(json).is_err());
    }

    #[test]
    fn strategy_serializes_type_field() {
        let space = generate(&variables(&["available resources"], &["incomplete information"]));
        let json = serde_json::to_value(&space.strategies()[0]).unwrap();
        assert_eq!(json["type"], "aggressive");
        assert_eq!(json["id"], "A");
    }
}
