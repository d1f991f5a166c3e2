//! Cognitive bias categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The cognitive distortions the detector can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasType {
    SunkCost,
    GroupPressure,
    Survivorship,
    Confirmation,
    LossAversion,
    Overconfidence,
    Scarcity,
    /// Generic reminder emitted when nothing specific was found.
    Other,
}

impl BiasType {
    pub const ALL: [BiasType; 8] = [
        BiasType::SunkCost,
        BiasType::GroupPressure,
        BiasType::Survivorship,
        BiasType::Confirmation,
        BiasType::LossAversion,
        BiasType::Overconfidence,
        BiasType::Scarcity,
        BiasType::Other,
    ];

    /// Returns the display label for this bias.
    pub fn label(&self) -> &'static str {
        match self {
            BiasType::SunkCost => "Sunk cost fallacy",
            BiasType::GroupPressure => "Herd effect / group pressure",
            BiasType::Survivorship => "Survivorship bias",
            BiasType::Confirmation => "Confirmation bias",
            BiasType::LossAversion => "Loss aversion",
            BiasType::Overconfidence => "Overconfidence",
            BiasType::Scarcity => "Scarcity / time pressure",
            BiasType::Other => "General reminder",
        }
    }
}

impl fmt::Display for BiasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
