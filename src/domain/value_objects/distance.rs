//! Distance value object
//!
//! A limit of acceptable sharpness is either a finite distance in millimeters
//! or unbounded. Infinity is a first-class variant so it can never be confused
//! with a negative or NaN number.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Distance in millimeters
    Finite(f64),
    /// Everything up to infinity is acceptably sharp
    Infinity,
}

impl Distance {
    /// Interpret `numerator / denominator`; a non-positive denominator means unbounded
    pub(crate) fn from_ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Distance::Finite(numerator / denominator)
        } else {
            Distance::Infinity
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinity)
    }

    /// Millimeters, or `None` for infinity
    pub fn millimeters(&self) -> Option<f64> {
        match self {
            Distance::Finite(mm) => Some(*mm),
            Distance::Infinity => None,
        }
    }

    /// Span between two limits; infinite if either end is
    pub fn span(near: Distance, far: Distance) -> Distance {
        match (near, far) {
            (Distance::Finite(near), Distance::Finite(far)) => Distance::Finite(far - near),
            _ => Distance::Infinity,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(mm) => match f.precision() {
                Some(p) => write!(f, "{:.*} mm", p, mm),
                None => write!(f, "{} mm", mm),
            },
            Distance::Infinity => write!(f, "∞"),
        }
    }
}

// JSON has no infinity literal, so unbounded limits are written as `null`.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(mm) => serializer.serialize_f64(*mm),
            Distance::Infinity => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ratio_positive_denominator() {
        assert_eq!(Distance::from_ratio(10.0, 4.0), Distance::Finite(2.5));
    }

    #[test]
    fn from_ratio_zero_or_negative_denominator_is_infinity() {
        assert_eq!(Distance::from_ratio(10.0, 0.0), Distance::Infinity);
        assert_eq!(Distance::from_ratio(10.0, -0.0), Distance::Infinity);
        assert_eq!(Distance::from_ratio(10.0, -1.0), Distance::Infinity);
    }

    #[test]
    fn span() {
        assert_eq!(
            Distance::span(Distance::Finite(2000.0), Distance::Finite(3500.0)),
            Distance::Finite(1500.0)
        );
        assert!(Distance::span(Distance::Finite(2000.0), Distance::Infinity).is_infinite());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{:.1}", Distance::Finite(2937.6987)), "2937.7 mm");
        assert_eq!(format!("{}", Distance::Infinity), "∞");
    }

    #[test]
    fn serializes_infinity_as_null() {
        assert_eq!(serde_json::to_string(&Distance::Infinity).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Distance::Finite(12.5)).unwrap(),
            "12.5"
        );
    }
}
