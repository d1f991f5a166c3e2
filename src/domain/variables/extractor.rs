//! Variable Extractor - goals, key variables, hard constraints, uncertainties.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::SearchBuffer;
use crate::domain::reframing::ReframedProblem;

use super::keyword_maps::{
    KeywordEntry, DEFAULT_GOALS, DEFAULT_HARD_CONSTRAINTS, DEFAULT_KEY_VARIABLES,
    DEFAULT_UNCERTAINTIES, GOAL_KEYWORDS, HARD_CONSTRAINT_KEYWORDS, KEY_VARIABLE_KEYWORDS,
    UNCERTAINTY_KEYWORDS,
};

/// The four extraction dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Goals,
    KeyVariables,
    HardConstraints,
    Uncertainties,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Goals,
        Dimension::KeyVariables,
        Dimension::HardConstraints,
        Dimension::Uncertainties,
    ];

    /// Ordered keyword map for this dimension.
    pub fn keywords(&self) -> &'static [KeywordEntry] {
        match self {
            Dimension::Goals => GOAL_KEYWORDS,
            Dimension::KeyVariables => KEY_VARIABLE_KEYWORDS,
            Dimension::HardConstraints => HARD_CONSTRAINT_KEYWORDS,
            Dimension::Uncertainties => UNCERTAINTY_KEYWORDS,
        }
    }

    /// List used wholesale when nothing in this dimension matches.
    pub fn defaults(&self) -> &'static [&'static str] {
        match self {
            Dimension::Goals => DEFAULT_GOALS,
            Dimension::KeyVariables => DEFAULT_KEY_VARIABLES,
            Dimension::HardConstraints => DEFAULT_HARD_CONSTRAINTS,
            Dimension::Uncertainties => DEFAULT_UNCERTAINTIES,
        }
    }
}

/// Decision structure extracted from the problem text.
///
/// Every list is non-empty and free of duplicates; order follows the
/// keyword map declaration order. `defaulted` names the dimensions whose
/// list is the default set rather than keyword hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablesAndConstraints {
    pub goals: Vec<String>,
    pub key_variables: Vec<String>,
    pub hard_constraints: Vec<String>,
    pub uncertainties: Vec<String>,
    #[serde(default)]
    pub defaulted: Vec<Dimension>,
}

impl VariablesAndConstraints {
    /// Returns the list for a dimension.
    pub fn get(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Goals => &self.goals,
            Dimension::KeyVariables => &self.key_variables,
            Dimension::HardConstraints => &self.hard_constraints,
            Dimension::Uncertainties => &self.uncertainties,
        }
    }

    pub fn has_key_variable(&self, label: &str) -> bool {
        self.key_variables.iter().any(|v| v == label)
    }

    pub fn has_uncertainty(&self, label: &str) -> bool {
        self.uncertainties.iter().any(|u| u == label)
    }

    /// True if the dimension holds its default set.
    pub fn is_defaulted(&self, dimension: Dimension) -> bool {
        self.defaulted.contains(&dimension)
    }

    /// Number of uncertainty sources found in the text.
    ///
    /// Zero when the uncertainties are the default set.
    pub fn identified_uncertainty_count(&self) -> usize {
        if self.is_defaulted(Dimension::Uncertainties) {
            0
        } else {
            self.uncertainties.len()
        }
    }

    fn get_mut(&mut self, dimension: Dimension) -> &mut Vec<String> {
        match dimension {
            Dimension::Goals => &mut self.goals,
            Dimension::KeyVariables => &mut self.key_variables,
            Dimension::HardConstraints => &mut self.hard_constraints,
            Dimension::Uncertainties => &mut self.uncertainties,
        }
    }
}

/// Stateless extraction service.
pub struct VariableExtractor;

impl VariableExtractor {
    /// Extracts all four dimensions from the original and reframed text.
    ///
    /// Absence of matches is not a failure: a dimension with no hits is
    /// replaced by its default list, never mixed with it.
    pub fn extract(problem: &ReframedProblem) -> VariablesAndConstraints {
        let buffer = SearchBuffer::joined([problem.original.as_str(), problem.reframed.as_str()]);

        let mut result = VariablesAndConstraints {
            goals: Vec::new(),
            key_variables: Vec::new(),
            hard_constraints: Vec::new(),
            uncertainties: Vec::new(),
            defaulted: Vec::new(),
        };

        for dimension in Dimension::ALL {
            let mut items = Self::match_dimension(&buffer, dimension);
            if items.is_empty() {
                debug!(dimension = ?dimension, "No keyword hits, using defaults");
                items = dimension.defaults().iter().map(|d| d.to_string()).collect();
                result.defaulted.push(dimension);
            }
            *result.get_mut(dimension) = items;
        }

        debug!(
            goals = result.goals.len(),
            key_variables = result.key_variables.len(),
            hard_constraints = result.hard_constraints.len(),
            uncertainties = result.uncertainties.len(),
            defaulted = result.defaulted.len(),
            "Extracted variables and constraints"
        );

        result
    }

    /// Labels of one dimension's keyword map that occur in the buffer.
    pub fn match_dimension(buffer: &SearchBuffer, dimension: Dimension) -> Vec<String> {
        dimension
            .keywords()
            .iter()
            .filter(|(_, keywords)| buffer.contains_any(keywords))
            .map(|(label, _)| label.to_string())
            .collect()
    }
}
