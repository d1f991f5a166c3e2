//! Output configuration

use serde::Deserialize;

use crate::ports::RenderFormat;

/// How the binary prints the analysis
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// `text`, `json` or `json_pretty`
    #[serde(default)]
    pub format: RenderFormat,
}
