//! Decision Lens - Structural analysis of personal decision problems
//!
//! This crate breaks a free-form decision problem into five parts: a
//! neutral restatement, goals/variables/constraints/uncertainties, a
//! four-strategy space, heuristic outcome distributions and cognitive
//! bias warnings. The pipeline is pure and deterministic.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::rendering::format_analysis;
pub use domain::analysis::{analyze, DecisionAnalysis};
