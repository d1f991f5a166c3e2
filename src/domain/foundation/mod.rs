//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types shared by every stage of the
//! analysis pipeline.

mod errors;
mod keywords;
mod probability;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use keywords::{contains_any, SearchBuffer};
pub use probability::Probability;
