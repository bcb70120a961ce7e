use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Inclusive `[low, high]` price bound.
///
/// Construction through [`PriceRange::new`] is unchecked: the store accepts
/// whatever the range selector hands it, and an inverted or out-of-bounds
/// range simply matches fewer books. Use [`PriceRange::try_new`] or
/// [`PriceRange::clamped`] where the `0 <= low <= high` invariant matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The full range `[0, max]` installed after a successful load.
    pub const fn up_to(max: f64) -> Self {
        Self::new(0.0, max)
    }

    pub fn try_new(low: f64, high: f64) -> Result<Self, ValidationError> {
        validate_bound("low", low)?;
        validate_bound("high", high)?;
        if low > high {
            return Err(ValidationError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Clamp both bounds into `[0, max]`, swapping them if inverted.
    ///
    /// Non-finite input collapses to the nearest edge.
    pub fn clamped(low: f64, high: f64, max: f64) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
        let clamp = |value: f64| {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, max)
            }
        };
        let (low, high) = (clamp(low), clamp(high));
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    pub fn contains(&self, amount: f64) -> bool {
        self.low <= amount && amount <= self.high
    }
}

fn validate_bound(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero_width() {
        assert_eq!(PriceRange::default(), PriceRange::new(0.0, 0.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let range = PriceRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
        assert!(!range.contains(9.99));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = PriceRange::new(20.0, 10.0);
        assert!(!range.is_ordered());
        assert!(!range.contains(15.0));
    }

    #[test]
    fn try_new_enforces_invariant() {
        assert!(PriceRange::try_new(0.0, 5.0).is_ok());
        assert_eq!(
            PriceRange::try_new(-1.0, 5.0),
            Err(ValidationError::NegativeValue { field: "low" })
        );
        assert_eq!(
            PriceRange::try_new(1.0, f64::INFINITY),
            Err(ValidationError::NonFiniteValue { field: "high" })
        );
        assert!(matches!(
            PriceRange::try_new(6.0, 5.0),
            Err(ValidationError::InvertedRange { .. })
        ));
    }

    #[test]
    fn clamped_fits_inside_max() {
        assert_eq!(
            PriceRange::clamped(-5.0, 100.0, 40.0),
            PriceRange::new(0.0, 40.0)
        );
        assert_eq!(
            PriceRange::clamped(30.0, 10.0, 40.0),
            PriceRange::new(10.0, 30.0)
        );
        assert_eq!(
            PriceRange::clamped(f64::NAN, 12.0, 0.0),
            PriceRange::new(0.0, 0.0)
        );
    }
}
