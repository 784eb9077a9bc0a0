//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::invalid_format(
                "percentage",
                format!("must be between 0 and 100, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Computes `part * 100 / whole`, rounding half to even.
    ///
    /// A zero `whole` yields zero. Results above 100 are clamped.
    pub fn from_ratio(part: u64, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let whole = u64::from(whole);
        let scaled = part.saturating_mul(100);
        let quotient = scaled / whole;
        let twice_remainder = (scaled % whole) * 2;

        let rounded = if twice_remainder > whole || (twice_remainder == whole && quotient % 2 == 1)
        {
            quotient + 1
        } else {
            quotient
        };

        Self(rounded.min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
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
    use proptest::prelude::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        assert!(Percentage::try_new(100).is_ok());
        assert!(Percentage::try_new(101).is_err());
    }

    #[test]
    fn from_ratio_with_zero_whole_is_zero() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(17, 0), Percentage::ZERO);
    }

    #[test]
    fn from_ratio_halves() {
        assert_eq!(Percentage::from_ratio(1, 2).value(), 50);
        assert_eq!(Percentage::from_ratio(2, 2).value(), 100);
    }

    #[test]
    fn from_ratio_rounds_thirds() {
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(2, 3).value(), 67);
    }

    #[test]
    fn from_ratio_rounds_ties_to_even() {
        // 12.5 -> 12, 37.5 -> 38, 62.5 -> 62, 87.5 -> 88
        assert_eq!(Percentage::from_ratio(1, 8).value(), 12);
        assert_eq!(Percentage::from_ratio(3, 8).value(), 38);
        assert_eq!(Percentage::from_ratio(5, 8).value(), 62);
        assert_eq!(Percentage::from_ratio(7, 8).value(), 88);
    }

    #[test]
    fn from_ratio_clamps_overfull_sessions() {
        assert_eq!(Percentage::from_ratio(3, 2), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    proptest! {
        #[test]
        fn from_ratio_matches_half_even_float_rounding(whole in 1u32..500, part_seed in 0u64..500) {
            let part = part_seed % (u64::from(whole) + 1);
            let exact = part as f64 * 100.0 / f64::from(whole);
            let expected = exact.round_ties_even() as u8;
            prop_assert_eq!(Percentage::from_ratio(part, whole).value(), expected);
        }

        #[test]
        fn from_ratio_never_exceeds_hundred(part in 0u64..10_000, whole in 0u32..100) {
            prop_assert!(Percentage::from_ratio(part, whole).value() <= 100);
        }
    }
}
