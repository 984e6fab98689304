//! Standard sensor formats

use serde::{Deserialize, Serialize};

use crate::domain::entities::Sensor;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SensorFormat {
    /// 36 x 24 mm
    #[default]
    #[value(alias = "ff")]
    FullFrame,
    /// 28.7 x 19 mm
    ApsH,
    /// 23.6 x 15.7 mm (Nikon DX and most APS-C bodies)
    #[value(alias = "aps-c-nikon")]
    ApsC,
    /// 22.2 x 14.8 mm
    ApsCCanon,
    /// 20.7 x 13.8 mm
    Foveon,
    /// 17.3 x 13.0 mm
    #[value(alias = "m43")]
    MicroFourThirds,
    /// 13.2 x 8.8 mm
    OneInch,
    /// 8.6 x 6.6 mm
    TwoThirdsInch,
}

impl SensorFormat {
    pub const ALL: [SensorFormat; 8] = [
        SensorFormat::FullFrame,
        SensorFormat::ApsH,
        SensorFormat::ApsC,
        SensorFormat::ApsCCanon,
        SensorFormat::Foveon,
        SensorFormat::MicroFourThirds,
        SensorFormat::OneInch,
        SensorFormat::TwoThirdsInch,
    ];

    /// Look up a format by its id, accepting the short aliases as well
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "ff" => Some(SensorFormat::FullFrame),
            "aps-c-nikon" => Some(SensorFormat::ApsC),
            "m43" => Some(SensorFormat::MicroFourThirds),
            id => Self::ALL.into_iter().find(|format| format.id() == id),
        }
    }

    /// Width and height in millimeters
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            SensorFormat::FullFrame => (36.0, 24.0),
            SensorFormat::ApsH => (28.7, 19.0),
            SensorFormat::ApsC => (23.6, 15.7),
            SensorFormat::ApsCCanon => (22.2, 14.8),
            SensorFormat::Foveon => (20.7, 13.8),
            SensorFormat::MicroFourThirds => (17.3, 13.0),
            SensorFormat::OneInch => (13.2, 8.8),
            SensorFormat::TwoThirdsInch => (8.6, 6.6),
        }
    }

    /// A fresh sensor of this format
    pub fn sensor(&self) -> Sensor {
        let (width, height) = self.dimensions();
        Sensor::from_format_dimensions(width, height)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SensorFormat::FullFrame => "Full Frame",
            SensorFormat::ApsH => "APS-H",
            SensorFormat::ApsC => "APS-C (Nikon)",
            SensorFormat::ApsCCanon => "APS-C (Canon)",
            SensorFormat::Foveon => "Foveon",
            SensorFormat::MicroFourThirds => "Micro Four Thirds",
            SensorFormat::OneInch => "1\"",
            SensorFormat::TwoThirdsInch => "2/3\"",
        }
    }

    /// Identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            SensorFormat::FullFrame => "full-frame",
            SensorFormat::ApsH => "aps-h",
            SensorFormat::ApsC => "aps-c",
            SensorFormat::ApsCCanon => "aps-c-canon",
            SensorFormat::Foveon => "foveon",
            SensorFormat::MicroFourThirds => "micro-four-thirds",
            SensorFormat::OneInch => "one-inch",
            SensorFormat::TwoThirdsInch => "two-thirds-inch",
        }
    }
}

impl std::fmt::Display for SensorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
