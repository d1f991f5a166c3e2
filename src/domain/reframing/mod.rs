//! Reframing - converts emotionally loaded text into a neutral question.
//!
//! Two pattern libraries (emotional language and stance) flag what the
//! wording carries; a topic classifier picks the template used for the
//! neutral restatement.

pub mod patterns;
mod reframer;
mod theme;

pub use patterns::{LanguagePattern, PatternHit, PatternKind, EMOTIONAL_PATTERNS, STANCE_PATTERNS};
pub use reframer::{element_label, ReframedProblem, Reframer};
pub use theme::Theme;
