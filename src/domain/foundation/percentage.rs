//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Fifty percent.
    pub const HALF: Self = Self(50);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true when `roll` (expected in `0..100`) falls inside this share.
    pub fn covers(&self, roll: u8) -> bool {
        roll < self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::HALF
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_try_new_accepts_valid_values() {
        assert_eq!(Percentage::try_new(0).unwrap(), Percentage::ZERO);
        assert_eq!(Percentage::try_new(50).unwrap(), Percentage::HALF);
        assert_eq!(Percentage::try_new(100).unwrap(), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percentage");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn default_is_half() {
        assert_eq!(Percentage::default().value(), 50);
    }

    #[test]
    fn covers_splits_rolls_at_the_boundary() {
        let p = Percentage::try_new(30).unwrap();
        assert!(p.covers(0));
        assert!(p.covers(29));
        assert!(!p.covers(30));
        assert!(!p.covers(99));
    }

    #[test]
    fn zero_covers_nothing_and_hundred_covers_everything() {
        for roll in 0..100 {
            assert!(!Percentage::ZERO.covers(roll));
            assert!(Percentage::HUNDRED.covers(roll));
        }
    }

    #[test]
    fn display_appends_percent_sign() {
        assert_eq!(format!("{}", Percentage::HALF), "50%");
    }

    #[test]
    fn deserializes_from_number_and_rejects_out_of_range() {
        let p: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(p.value(), 75);
        assert!(serde_json::from_str::<Percentage>("150").is_err());
    }
}
