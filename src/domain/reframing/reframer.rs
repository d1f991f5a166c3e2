//! Reframer - neutral restatement of a loaded problem statement.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns;
use super::Theme;

/// The problem as written, its neutral restatement, and the loaded
/// language that was set aside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReframedProblem {
    pub original: String,
    pub reframed: String,
    pub theme: Theme,
    /// One `"<category>: '<matches>'"` entry per matching category, in
    /// library declaration order.
    pub emotional_elements: Vec<String>,
}

impl ReframedProblem {
    /// Returns the category label of each emotional element.
    pub fn element_labels(&self) -> impl Iterator<Item = &str> {
        self.emotional_elements.iter().map(|e| element_label(e))
    }
}

/// Extracts the category label from a formatted emotional element.
pub fn element_label(element: &str) -> &str {
    element
        .split_once(": ")
        .map(|(label, _)| label)
        .unwrap_or(element)
}

/// Stateless reframing service.
pub struct Reframer;

impl Reframer {
    /// Classifies loaded language and restates the problem neutrally.
    ///
    /// The restatement is a template lookup keyed by theme; it does not
    /// adapt to the emotional content. Accepts any input, including empty
    /// or pattern-free text.
    pub fn reframe(problem_text: &str) -> ReframedProblem {
        let emotional_elements: Vec<String> = patterns::scan(problem_text)
            .iter()
            .map(|hit| hit.to_element())
            .collect();

        let theme = Theme::classify(problem_text);

        debug!(
            theme = theme.label(),
            emotional_elements = emotional_elements.len(),
            "Reframed problem"
        );

        ReframedProblem {
            original: problem_text.to_string(),
            reframed: theme.reframe(),
            theme,
            emotional_elements,
        }
    }
}
