//! Bias - heuristic detection of cognitive-bias signatures in phrasing.

mod bias_type;
mod detector;
pub mod rules;

pub use bias_type::BiasType;
pub use detector::{BiasDetector, BiasWarnings, CognitiveBias};
pub use rules::{BiasRule, BIAS_RULES, EMOTION_MARKERS};
