//! Length units
//!
//! All calculations run in millimeters. Values entered in other units are
//! converted once at the boundary with [`to_millimeters`] or [`parse_length`].

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Kilometer,
}

impl LengthUnit {
    /// Millimeters per one unit
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Decimeter => 100.0,
            LengthUnit::Meter => 1_000.0,
            LengthUnit::Kilometer => 1_000_000.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Decimeter => "dm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = LengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "mm" => Ok(LengthUnit::Millimeter),
            "cm" => Ok(LengthUnit::Centimeter),
            "dm" => Ok(LengthUnit::Decimeter),
            "m" => Ok(LengthUnit::Meter),
            "km" => Ok(LengthUnit::Kilometer),
            other => Err(LengthParseError::UnknownUnit {
                unit: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LengthParseError {
    #[error("empty length")]
    Empty,

    #[error("invalid number '{value}'")]
    InvalidNumber { value: String },

    #[error("unknown length unit '{unit}' (expected mm, cm, dm, m or km)")]
    UnknownUnit { unit: String },
}

/// Convert a value expressed in `unit` to millimeters
pub fn to_millimeters(value: f64, unit: LengthUnit) -> f64 {
    value * unit.factor()
}

/// Parse strings such as `"3m"`, `"150 cm"` or `"2500"` into millimeters.
///
/// A bare number is taken to be millimeters.
pub fn parse_length(input: &str) -> Result<f64, LengthParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LengthParseError::Empty);
    }

    let split = input
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);
    let number = number.trim();

    let value: f64 = number
        .parse()
        .map_err(|_| LengthParseError::InvalidNumber {
            value: number.to_string(),
        })?;
    let unit: LengthUnit = unit.parse()?;

    Ok(to_millimeters(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_factors() {
        assert_eq!(to_millimeters(105.0, LengthUnit::Millimeter), 105.0);
        assert_eq!(to_millimeters(29.5, LengthUnit::Centimeter), 295.0);
        assert_eq!(to_millimeters(3.0, LengthUnit::Decimeter), 300.0);
        assert_eq!(to_millimeters(3.0, LengthUnit::Meter), 3000.0);
        assert_eq!(to_millimeters(1.5, LengthUnit::Kilometer), 1_500_000.0);
    }

    #[test]
    fn parse_with_units() {
        assert_eq!(parse_length("3m").unwrap(), 3000.0);
        assert_eq!(parse_length("150 cm").unwrap(), 1500.0);
        assert_eq!(parse_length("0.295M").unwrap(), 295.0);
        assert_eq!(parse_length("2km").unwrap(), 2_000_000.0);
    }

    #[test]
    fn parse_bare_number_is_millimeters() {
        assert_eq!(parse_length("2500").unwrap(), 2500.0);
        assert_eq!(parse_length(" 12.5 ").unwrap(), 12.5);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_length("   "), Err(LengthParseError::Empty));
        assert!(matches!(
            parse_length("3ft"),
            Err(LengthParseError::UnknownUnit { .. })
        ));
        assert!(matches!(
            parse_length("m"),
            Err(LengthParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_length("1.2.3m"),
            Err(LengthParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn unit_symbol_roundtrip() {
        for unit in [
            LengthUnit::Millimeter,
            LengthUnit::Centimeter,
            LengthUnit::Decimeter,
            LengthUnit::Meter,
            LengthUnit::Kilometer,
        ] {
            assert_eq!(unit.symbol().parse::<LengthUnit>().unwrap(), unit);
        }
    }
}
