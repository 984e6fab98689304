//! Circle-of-confusion divisor value objects
//!
//! The circle of confusion is the sensor diagonal divided by a conventional
//! ratio. Three named "Zeiss" ratios exist; callers may also supply their own.

use serde::{Deserialize, Serialize};

use crate::error::{DofError, DofResult};

/// Named Zeiss ratios
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ZeissRatio {
    /// d/1730, the original Zeiss formula
    Classic,
    /// d/1000
    Traditional,
    /// d/1500
    #[default]
    Modern,
}

impl ZeissRatio {
    pub const ALL: [ZeissRatio; 3] = [
        ZeissRatio::Classic,
        ZeissRatio::Traditional,
        ZeissRatio::Modern,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "classic" => Some(ZeissRatio::Classic),
            "traditional" => Some(ZeissRatio::Traditional),
            "modern" => Some(ZeissRatio::Modern),
            _ => None,
        }
    }

    /// The divisor applied to the sensor diagonal
    pub fn divisor(&self) -> u32 {
        match self {
            ZeissRatio::Classic => 1730,
            ZeissRatio::Traditional => 1000,
            ZeissRatio::Modern => 1500,
        }
    }
}

impl std::fmt::Display for ZeissRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeissRatio::Classic => write!(f, "classic"),
            ZeissRatio::Traditional => write!(f, "traditional"),
            ZeissRatio::Modern => write!(f, "modern"),
        }
    }
}

/// A caller-supplied divisor, positive and finite.
///
/// The field is private, so the only way to get one is [`CocDivisor::custom`]:
///
/// ```compile_fail
/// use dofcalc::domain::value_objects::{CocDivisor, CustomDivisor};
///
/// let broken = CocDivisor::Custom(CustomDivisor(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomDivisor(f64);

impl CustomDivisor {
    pub fn get(&self) -> f64 {
        self.0
    }
}

/// A divisor that is guaranteed to be positive and finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CocDivisor {
    Zeiss(ZeissRatio),
    Custom(CustomDivisor),
}

impl CocDivisor {
    /// Build a caller-supplied divisor, rejecting zero, negative and non-finite values
    pub fn custom(divisor: f64) -> DofResult<Self> {
        if divisor.is_finite() && divisor > 0.0 {
            Ok(CocDivisor::Custom(CustomDivisor(divisor)))
        } else {
            Err(DofError::NonPositiveCocDivisor { divisor })
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            CocDivisor::Zeiss(ratio) => f64::from(ratio.divisor()),
            CocDivisor::Custom(divisor) => divisor.get(),
        }
    }
}

impl Default for CocDivisor {
    fn default() -> Self {
        CocDivisor::Zeiss(ZeissRatio::default())
    }
}

impl From<ZeissRatio> for CocDivisor {
    fn from(ratio: ZeissRatio) -> Self {
        CocDivisor::Zeiss(ratio)
    }
}

impl std::fmt::Display for CocDivisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CocDivisor::Zeiss(ratio) => write!(f, "{} (d/{})", ratio, ratio.divisor()),
            CocDivisor::Custom(divisor) => write!(f, "custom (d/{})", divisor.get()),
        }
    }
}
