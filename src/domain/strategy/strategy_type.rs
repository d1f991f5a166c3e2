//! Strategy archetypes and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four action archetypes every strategy space contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Aggressive,
    Conservative,
    Hedge,
    Exit,
}

impl StrategyType {
    /// All archetypes in generation order (A, B, C, D).
    pub const ALL: [StrategyType; 4] = [
        StrategyType::Aggressive,
        StrategyType::Conservative,
        StrategyType::Hedge,
        StrategyType::Exit,
    ];

    /// Returns the display label for this archetype.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyType::Aggressive => "Aggressive",
            StrategyType::Conservative => "Conservative",
            StrategyType::Hedge => "Hedge",
            StrategyType::Exit => "Exit",
        }
    }

    /// Returns the fixed identifier assigned to this archetype.
    pub fn id(&self) -> StrategyId {
        match self {
            StrategyType::Aggressive => StrategyId::A,
            StrategyType::Conservative => StrategyId::B,
            StrategyType::Hedge => StrategyId::C,
            StrategyType::Exit => StrategyId::D,
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Letter identifier of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategyId {
    A,
    B,
    C,
    D,
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyId::A => "A",
            StrategyId::B => "B",
            StrategyId::C => "C",
            StrategyId::D => "D",
        };
        write!(f, "{}", s)
    }
}
