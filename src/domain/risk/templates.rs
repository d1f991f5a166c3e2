//! Base outcome distributions per strategy archetype.

use crate::domain::strategy::StrategyType;

/// One qualitative outcome with its baseline weight in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeBucket {
    pub weight: f64,
    pub description: &'static str,
}

const fn bucket(weight: f64, description: &'static str) -> OutcomeBucket {
    OutcomeBucket {
        weight,
        description,
    }
}

/// Base distribution table, keyed by archetype.
pub type RiskTemplateTable = &'static [(StrategyType, &'static [OutcomeBucket])];

pub const RISK_TEMPLATES: RiskTemplateTable = &[
    (
        StrategyType::Aggressive,
        &[
            bucket(20.0, "Breakthrough: the goal is reached faster or further than planned"),
            bucket(35.0, "Partial success: real progress, with setbacks along the way"),
            bucket(30.0, "Stall: resources are consumed with limited return"),
            bucket(15.0, "Significant loss: withdrawal at a heavy cost"),
        ],
    ),
    (
        StrategyType::Conservative,
        &[
            bucket(15.0, "Steady improvement within the current path"),
            bucket(45.0, "Status quo holds: little changes either way"),
            bucket(30.0, "Slow erosion: the position weakens over time"),
            bucket(10.0, "Lasting regret over the option not taken"),
        ],
    ),
    (
        StrategyType::Hedge,
        &[
            bucket(15.0, "The trial succeeds and becomes the new main path"),
            bucket(40.0, "The trial yields useful information and a clearer choice"),
            bucket(30.0, "Mixed signals: the trial ends inconclusive"),
            bucket(15.0, "Overload: both tracks suffer"),
        ],
    ),
    (
        StrategyType::Exit,
        &[
            bucket(10.0, "A better direction is found quickly"),
            bucket(40.0, "A new direction is found after a period of adjustment"),
            bucket(35.0, "An extended search drains resources"),
            bucket(15.0, "Re-entry from a weaker position than before"),
        ],
    ),
];

/// Used for any archetype missing from the table.
pub const GENERIC_TEMPLATE: &[OutcomeBucket] = &[
    bucket(25.0, "Better than expected"),
    bucket(50.0, "Roughly as expected"),
    bucket(25.0, "Worse than expected"),
];
