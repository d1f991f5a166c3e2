//! Application layer - Commands and Handlers.
//!
//! This layer validates boundary input and invokes the domain pipeline.

pub mod handlers;

pub use handlers::{AnalyzeDecisionCommand, AnalyzeDecisionHandler, InputLimits};
