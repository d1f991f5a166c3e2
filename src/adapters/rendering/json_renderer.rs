//! JSON analysis renderer adapter.
//!
//! Emits the raw structured data model, compact or indented.

use crate::domain::analysis::DecisionAnalysis;
use crate::ports::{AnalysisRenderer, RenderError, RenderFormat};

/// Structured-data implementation of `AnalysisRenderer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAnalysisRenderer {
    pretty: bool,
}

impl JsonAnalysisRenderer {
    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl AnalysisRenderer for JsonAnalysisRenderer {
    fn render(&self, analysis: &DecisionAnalysis) -> Result<String, RenderError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(analysis)?
        } else {
            serde_json::to_string(analysis)?
        };
        Ok(rendered)
    }

    fn format(&self) -> RenderFormat {
        if self.pretty {
            RenderFormat::JsonPretty
        } else {
            RenderFormat::Json
        }
    }
}
