//! Bias Detector - flags phrasing that matches known bias signatures.
//!
//! This is a recall-oriented heuristic, not a calibrated classifier: a
//! single keyword is enough to raise a warning, and a missing warning says
//! nothing about the absence of a bias.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::reframing::{element_label, ReframedProblem};

use super::rules::{
    rule_for, BiasRule, BIAS_RULES, COMPILED_RULES, EMOTION_MARKERS, FALLBACK_DESCRIPTION,
    FALLBACK_MITIGATION,
};
use super::BiasType;

/// A flagged bias with guidance on how to counter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveBias {
    #[serde(rename = "type")]
    pub bias_type: BiasType,
    pub type_label: String,
    pub description: String,
    pub mitigation: String,
}

impl CognitiveBias {
    fn from_rule(rule: &BiasRule) -> Self {
        Self {
            bias_type: rule.bias_type,
            type_label: rule.bias_type.label().to_string(),
            description: rule.description.to_string(),
            mitigation: rule.mitigation.to_string(),
        }
    }

    /// The generic reminder used when nothing specific was detected.
    pub fn generic_reminder() -> Self {
        Self {
            bias_type: BiasType::Other,
            type_label: BiasType::Other.label().to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            mitigation: FALLBACK_MITIGATION.to_string(),
        }
    }
}

/// Non-empty set of bias warnings, unique by type, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiasWarnings(Vec<CognitiveBias>);

impl BiasWarnings {
    /// Deduplicates by type (first arrival wins) and substitutes the
    /// generic reminder for an empty set.
    pub fn from_detected(detected: impl IntoIterator<Item = CognitiveBias>) -> Self {
        let mut unique: Vec<CognitiveBias> = Vec::new();
        for bias in detected {
            if !unique.iter().any(|b| b.bias_type == bias.bias_type) {
                unique.push(bias);
            }
        }
        if unique.is_empty() {
            unique.push(CognitiveBias::generic_reminder());
        }
        Self(unique)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CognitiveBias> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CognitiveBias] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for warnings built by `from_detected`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, bias_type: BiasType) -> bool {
        self.0.iter().any(|b| b.bias_type == bias_type)
    }

    /// Types in output order.
    pub fn types(&self) -> Vec<BiasType> {
        self.0.iter().map(|b| b.bias_type).collect()
    }
}

impl<'a> IntoIterator for &'a BiasWarnings {
    type Item = &'a CognitiveBias;
    type IntoIter = std::slice::Iter<'a, CognitiveBias>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Stateless bias detection service.
pub struct BiasDetector;

impl BiasDetector {
    /// Scans the original text, then the reframer's emotional elements.
    ///
    /// Text-detected biases come first in rule-table order, followed by
    /// emotion-inferred biases whose type was not already found.
    pub fn detect(problem: &ReframedProblem) -> BiasWarnings {
        let mut found = Self::scan_text(&problem.original);
        let from_text = found.len();

        for inferred in Self::infer_from_emotions(&problem.emotional_elements) {
            if !found.iter().any(|b| b.bias_type == inferred.bias_type) {
                found.push(inferred);
            }
        }

        debug!(
            from_text,
            from_emotions = found.len() - from_text,
            "Detected cognitive biases"
        );

        BiasWarnings::from_detected(found)
    }

    /// Evaluates every rule against `text`; a rule fires on its first
    /// matching pattern.
    pub fn scan_text(text: &str) -> Vec<CognitiveBias> {
        BIAS_RULES
            .iter()
            .zip(COMPILED_RULES.iter())
            .filter(|(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
            .map(|(rule, _)| CognitiveBias::from_rule(rule))
            .collect()
    }

    /// Maps emotional-element labels carrying a known marker to biases.
    pub fn infer_from_emotions(elements: &[String]) -> Vec<CognitiveBias> {
        let mut inferred: Vec<CognitiveBias> = Vec::new();
        for element in elements {
            let label = element_label(element);
            for (marker, bias_type) in EMOTION_MARKERS {
                if !label.contains(marker) || inferred.iter().any(|b| b.bias_type == *bias_type) {
                    continue;
                }
                match rule_for(*bias_type) {
                    Some(rule) => inferred.push(CognitiveBias::from_rule(rule)),
                    None => warn!(bias_type = ?bias_type, "Emotion marker without a bias rule"),
                }
            }
        }
        inferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reframing::Reframer;

    fn detect(text: &str) -> BiasWarnings {
        BiasDetector::detect(&Reframer::reframe(text))
    }

    fn problem(original: &str, elements: &[&str]) -> ReframedProblem {
        ReframedProblem {
            original: original.to_string(),
            reframed: String::new(),
            theme: crate::domain::reframing::Theme::LifeDecision,
            emotional_elements: elements.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn career_example_flags_sunk_cost_and_group_pressure() {
        let biases = detect("我很焦虑，到底要不要辞职创业，已经投入了两年时间，感觉大家都在卷");
        assert_eq!(biases.types(), vec![BiasType::SunkCost, BiasType::GroupPressure]);
    }

    #[test]
    fn text_order_follows_rule_table() {
        // Loss wording comes first in the text, sunk cost first in the table.
        let biases = BiasDetector::scan_text("怕损失，但已经投入太多");
        let types: Vec<_> = biases.iter().map(|b| b.bias_type).collect();
        assert_eq!(types, vec![BiasType::SunkCost, BiasType::LossAversion]);
    }

    #[test]
    fn no_patterns_and_no_elements_yields_single_fallback() {
        let biases = BiasDetector::detect(&problem("xyzxyzxyz unmatched filler text", &[]));
        assert_eq!(biases.len(), 1);
        assert_eq!(biases.as_slice()[0], CognitiveBias::generic_reminder());
        assert!(biases.contains(BiasType::Other));
    }

    #[test]
    fn emotion_markers_add_missing_biases_after_text_hits() {
        let biases = BiasDetector::detect(&problem(
            "舍不得现在的一切",
            &["urgency framing: '马上'", "preset conclusion: '已经决定了'"],
        ));
        assert_eq!(
            biases.types(),
            vec![BiasType::LossAversion, BiasType::Scarcity, BiasType::Confirmation]
        );
    }

    #[test]
    fn emotion_inference_skips_types_found_in_text() {
        let biases = BiasDetector::detect(&problem(
            "大家都这么做",
            &["group pressure framing: '大家都'"],
        ));
        assert_eq!(biases.types(), vec![BiasType::GroupPressure]);
    }

    #[test]
    fn unrelated_elements_infer_nothing() {
        let inferred = BiasDetector::infer_from_emotions(&["anxiety: '焦虑'".to_string()]);
        assert!(inferred.is_empty());
    }

    #[test]
    fn marker_in_matched_text_does_not_count() {
        // Only the category label is inspected, not the quoted matches.
        let inferred =
            BiasDetector::infer_from_emotions(&["anxiety: 'group pressure'".to_string()]);
        assert!(inferred.is_empty());
    }

    #[test]
    fn from_detected_deduplicates_by_type() {
        let rule = rule_for(BiasType::SunkCost).unwrap();
        let warnings = BiasWarnings::from_detected(vec![
            CognitiveBias::from_rule(rule),
            CognitiveBias::from_rule(rule),
        ]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn english_phrasing_is_detected() {
        let biases = detect("Everyone says it's now or never and I can't fail");
        assert!(biases.contains(BiasType::GroupPressure));
        assert!(biases.contains(BiasType::Scarcity));
        assert!(biases.contains(BiasType::Overconfidence));
    }

    #[test]
    fn warnings_serialize_as_array_with_type_field() {
        let biases = detect("已经投入了三年");
        let json = serde_json::to_value(&biases).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "sunk_cost");
        assert_eq!(json[0]["type_label"], "Sunk cost fallacy");
    }
}
