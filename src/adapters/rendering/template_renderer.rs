//! Template-based analysis renderer adapter.
//!
//! Renders a `DecisionAnalysis` into a fixed textual layout: a title
//! followed by five numbered sections, one per pipeline stage.

use crate::domain::analysis::DecisionAnalysis;
use crate::domain::bias::BiasWarnings;
use crate::domain::reframing::ReframedProblem;
use crate::domain::risk::RiskRewardAnalysis;
use crate::domain::strategy::{Strategy, StrategySpace};
use crate::domain::variables::{Dimension, VariablesAndConstraints};
use crate::ports::{AnalysisRenderer, RenderError, RenderFormat};

/// Document title.
pub const TITLE: &str = "# Decision Structure Analysis";

/// Character repeated to draw probability bars.
pub const BAR_MARKER: char = '█';

/// Percentage points represented by one bar marker.
pub const BAR_STEP: u8 = 5;

const FOOTER: &str = "*This analysis lays out the structure of the decision. It does not \
recommend an option. Outcome probabilities are heuristic estimates.*";

/// Template-based implementation of `AnalysisRenderer`.
#[derive(Debug, Clone, Default)]
pub struct TemplateAnalysisRenderer;

impl TemplateAnalysisRenderer {
    /// Creates a new template renderer.
    pub fn new() -> Self {
        Self
    }

    /// Generates the Problem Reframing section.
    fn render_reframing(&self, problem: &ReframedProblem) -> String {
        let mut section = String::from("## 1. Problem Reframing\n\n");

        section.push_str(&format!("**Original statement:** {}\n\n", problem.original));
        section.push_str(&format!("**Neutral restatement:** {}\n\n", problem.reframed));
        section.push_str(&format!("**Core theme:** {}\n\n", problem.theme.label()));

        section.push_str("### Emotional and Rhetorical Elements\n");
        if problem.emotional_elements.is_empty() {
            section.push_str("- None detected\n");
        } else {
            for element in &problem.emotional_elements {
                section.push_str(&format!("- {}\n", element));
            }
        }
        section.push('\n');

        section
    }

    /// Generates the Variables and Constraints section.
    fn render_variables(&self, variables: &VariablesAndConstraints) -> String {
        let mut section = String::from("## 2. Variables and Constraints\n\n");

        for dimension in Dimension::ALL {
            section.push_str(&format!("### {}\n", heading_for(dimension)));
            for item in variables.get(dimension) {
                section.push_str(&format!("- {}\n", item));
            }
            section.push('\n');
        }

        section
    }

    /// Generates the Strategy Space section.
    fn render_strategies(&self, space: &StrategySpace) -> String {
        let mut section = String::from("## 3. Strategy Space\n\n");

        for strategy in space.strategies() {
            section.push_str(&self.render_strategy(strategy));
        }

        section
    }

    fn render_strategy(&self, strategy: &Strategy) -> String {
        let mut block = format!(
            "### Strategy {}: {} ({})\n\n",
            strategy.id, strategy.name, strategy.type_label
        );

        block.push_str("**Preconditions:**\n");
        for line in &strategy.preconditions {
            block.push_str(&format!("- {}\n", line));
        }
        block.push('\n');

        block.push_str(&format!("**Execution cost:** {}\n\n", strategy.execution_cost));

        block.push_str("**Trigger points:**\n");
        for line in &strategy.trigger_points {
            block.push_str(&format!("- {}\n", line));
        }
        block.push('\n');

        block.push_str(&format!("**Worst case:** {}\n\n", strategy.worst_case));

        block
    }

    /// Generates the Risk and Outcome Distribution section.
    fn render_risk(&self, analyses: &[RiskRewardAnalysis]) -> String {
        let mut section = String::from("## 4. Risk and Outcome Distribution\n\n");

        for analysis in analyses {
            section.push_str(&format!(
                "### Strategy {}: {}\n\n",
                analysis.strategy_id, analysis.strategy_name
            ));
            for outcome in &analysis.distributions {
                section.push_str(&format!(
                    "- {} {} {}\n",
                    bar(outcome.probability.value()),
                    outcome.probability,
                    outcome.description
                ));
            }
            section.push('\n');
        }

        section
    }

    /// Generates the Cognitive Bias Warnings section.
    fn render_biases(&self, biases: &BiasWarnings) -> String {
        let mut section = String::from("## 5. Cognitive Bias Warnings\n\n");

        for bias in biases {
            section.push_str(&format!("### {}\n\n", bias.type_label));
            section.push_str(&format!("{}\n\n", bias.description));
            section.push_str(&format!("**Mitigation:** {}\n\n", bias.mitigation));
        }

        section
    }

    /// Assembles the full document.
    pub fn render_document(&self, analysis: &DecisionAnalysis) -> String {
        let mut doc = format!("{}\n\n", TITLE);

        doc.push_str(&self.render_reframing(&analysis.reframed_problem));
        doc.push_str(&self.render_variables(&analysis.variables));
        doc.push_str(&self.render_strategies(&analysis.strategy_space));
        doc.push_str(&self.render_risk(&analysis.risk_analysis));
        doc.push_str(&self.render_biases(&analysis.biases));

        doc.push_str("---\n\n");
        doc.push_str(FOOTER);
        doc.push('\n');

        doc
    }
}

impl AnalysisRenderer for TemplateAnalysisRenderer {
    fn render(&self, analysis: &DecisionAnalysis) -> Result<String, RenderError> {
        Ok(self.render_document(analysis))
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Text
    }
}

/// Renders an analysis into the fixed textual layout.
pub fn format_analysis(analysis: &DecisionAnalysis) -> String {
    TemplateAnalysisRenderer::new().render_document(analysis)
}

/// Bar of `floor(percent / 5)` markers.
pub fn bar(percent: u8) -> String {
    BAR_MARKER.to_string().repeat(usize::from(percent / BAR_STEP))
}

fn heading_for(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Goals => "Goals",
        Dimension::KeyVariables => "Key Variables",
        Dimension::HardConstraints => "Hard Constraints",
        Dimension::Uncertainties => "Uncertainties",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::analyze;

    fn sample() -> DecisionAnalysis {
        analyze("我很焦虑，到底要不要辞职创业，已经投入了两年时间，感觉大家都在卷")
    }

    fn position(doc: &str, needle: &str) -> usize {
        doc.find(needle)
            .unwrap_or_else(|| panic!("'{}' missing from document", needle))
    }

    #[test]
    fn bar_length_is_floor_of_fifths() {
        assert_eq!(bar(0), "");
        assert_eq!(bar(4).chars().count(), 0);
        assert_eq!(bar(5).chars().count(), 1);
        assert_eq!(bar(24).chars().count(), 4);
        assert_eq!(bar(100).chars().count(), 20);
    }

    #[test]
    fn document_starts_with_title() {
        let doc = format_analysis(&sample());
        assert!(doc.starts_with(TITLE));
    }

    #[test]
    fn sections_appear_in_order() {
        let doc = format_analysis(&sample());
        let positions: Vec<usize> = [
            "## 1. Problem Reframing",
            "## 2. Variables and Constraints",
            "## 3. Strategy Space",
            "## 4. Risk and Outcome Distribution",
            "## 5. Cognitive Bias Warnings",
        ]
        .iter()
        .map(|h| position(&doc, h))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn strategy_subsections_follow_fixed_order() {
        let analysis = sample();
        let doc = format_analysis(&analysis);
        let start = position(&doc, "### Strategy A: Full commitment (Aggressive)");
        let block = &doc[start..position(&doc, "### Strategy B:")];

        let pre = position(block, "**Preconditions:**");
        let cost = position(block, "**Execution cost:**");
        let triggers = position(block, "**Trigger points:**");
        let worst = position(block, "**Worst case:**");
        assert!(pre < cost && cost < triggers && triggers < worst);
    }

    #[test]
    fn every_distribution_row_is_rendered_with_its_bar() {
        let analysis = sample();
        let doc = format_analysis(&analysis);
        for risk in &analysis.risk_analysis {
            for outcome in &risk.distributions {
                let row = format!(
                    "- {} {} {}",
                    bar(outcome.probability.value()),
                    outcome.probability,
                    outcome.description
                );
                assert!(doc.contains(&row), "missing row: {}", row);
            }
        }
    }

    #[test]
    fn emotional_elements_fall_back_to_none_detected() {
        let doc = format_analysis(&analyze("Should we repaint the kitchen this spring?"));
        let section = &doc[position(&doc, "### Emotional and Rhetorical Elements")..];
        assert_eq!(section.lines().nth(1), Some("- None detected"));
    }

    #[test]
    fn renderer_port_reports_text_format() {
        let renderer = TemplateAnalysisRenderer::new();
        assert_eq!(renderer.format(), RenderFormat::Text);
        let analysis = sample();
        assert_eq!(renderer.render(&analysis).unwrap(), format_analysis(&analysis));
    }
}
