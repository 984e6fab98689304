//! Output Rendering
//!
//! Shared formatting for text output: how distances, lengths and apertures
//! are written, and which glyphs are used with and without unicode.

use crate::domain::value_objects::Distance;

/// Glyphs for text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub infinity: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub times: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            infinity: "∞",
            check: "✓",
            cross: "✗",
            times: "×",
        }
    }

    pub fn ascii() -> Self {
        Self {
            infinity: "inf",
            check: "[OK]",
            cross: "[FAIL]",
            times: "x",
        }
    }

    pub fn for_unicode(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Writes lengths with a fixed number of decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    precision: usize,
    icons: Icons,
}

impl Formatter {
    pub fn new(precision: usize, unicode: bool) -> Self {
        Self {
            precision,
            icons: Icons::for_unicode(unicode),
        }
    }

    pub fn icons(&self) -> Icons {
        self.icons
    }

    /// `2937.7 mm`
    pub fn length(&self, millimeters: f64) -> String {
        format!("{:.*} mm", self.precision, millimeters)
    }

    /// A length, or the infinity glyph
    pub fn distance(&self, distance: Distance) -> String {
        match distance {
            Distance::Finite(mm) => self.length(mm),
            Distance::Infinity => self.icons.infinity.to_string(),
        }
    }

    /// `f/2.8`; whole f-numbers lose the trailing `.0`
    pub fn aperture(&self, f_number: f64) -> String {
        format!("f/{}", f_number)
    }

    /// Circle of confusion to four significant decimals (`0.0288 mm`)
    pub fn coc(&self, millimeters: f64) -> String {
        format!("{:.4} mm", millimeters)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(1, true)
    }
}
