//! Ports - Interfaces between the domain and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts the
//! boundary depends on. Adapters implement these ports.
//!
//! - `AnalysisRenderer` - Projection of a `DecisionAnalysis` into text or structured data

mod analysis_renderer;

pub use analysis_renderer::{AnalysisRenderer, RenderError, RenderFormat};
