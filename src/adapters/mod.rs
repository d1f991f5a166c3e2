//! Adapters - Implementations of port interfaces and boundary surfaces.
//!
//! - `rendering` - `AnalysisRenderer` implementations (text layout, JSON)
//! - `tools` - the `analyze_decision` request/response tool

pub mod rendering;
pub mod tools;
