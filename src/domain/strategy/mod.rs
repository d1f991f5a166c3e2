//! Strategy - the fixed aggressive / conservative / hedge / exit space.
//!
//! Per-archetype behaviour is a configuration record looked up by enum,
//! not a trait hierarchy.

mod generator;
mod strategy_type;

pub use generator::{ConditionalLine, Strategy, StrategyGenerator, StrategySpace, StrategyTemplate};
pub use strategy_type::{StrategyId, StrategyType};
