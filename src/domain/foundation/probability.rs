//! Probability value object on a whole-percent scale (0-100).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number probability between 0 and 100 inclusive.
///
/// Outcome distributions are heuristic, so whole percents are the only
/// precision the analysis ever claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(u8);

impl Probability {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Creates a new Probability, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Probability, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "probability",
                0,
                100,
                usize::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Probability::new(35).value(), 35);
        assert_eq!(Probability::new(101).value(), 100);
        assert_eq!(Probability::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_over_100() {
        match Probability::try_new(120) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "probability");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 120);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(Probability::try_new(100).is_ok());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Probability::default(), Probability::ZERO);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Probability::new(35)), "35%");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&Probability::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: Probability = serde_json::from_str("42").unwrap();
        assert_eq!(back.value(), 42);
    }
}
