//! Rendering adapters - `AnalysisRenderer` implementations.

mod json_renderer;
mod template_renderer;

pub use json_renderer::JsonAnalysisRenderer;
pub use template_renderer::{bar, format_analysis, TemplateAnalysisRenderer, BAR_MARKER, BAR_STEP, TITLE};

use crate::ports::{AnalysisRenderer, RenderFormat};

/// Returns the renderer for a configured output format.
pub fn renderer_for(format: RenderFormat) -> Box<dyn AnalysisRenderer> {
    match format {
        RenderFormat::Text => Box::new(TemplateAnalysisRenderer::new()),
        RenderFormat::Json => Box::new(JsonAnalysisRenderer::compact()),
        RenderFormat::JsonPretty => Box::new(JsonAnalysisRenderer::pretty()),
    }
}
