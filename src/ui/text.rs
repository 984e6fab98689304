//! Styled text that degrades to plain text when color is off.

use std::fmt;

use crossterm::style::{Color, Stylize};

/// Role of a piece of text; each role has one terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Dim => Color::DarkGrey,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Option<Tone>,
    bold: bool,
}

impl ColoredText {
    fn with_tone(text: impl Into<String>, tone: Option<Tone>) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::with_tone(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_tone(text, Some(Tone::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_tone(text, Some(Tone::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_tone(text, Some(Tone::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_tone(text, Some(Tone::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_tone(text, Some(Tone::Dim))
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// ANSI-styled when `supports_color`, the bare text otherwise
    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || (self.tone.is_none() && !self.bold) {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(tone) = self.tone {
            styled = styled.with(tone.color());
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_means_no_escapes() {
        assert_eq!(ColoredText::success("Added").bold().render(false), "Added");
        assert_eq!(ColoredText::dim("2 lens(es)").render(false), "2 lens(es)");
    }

    #[test]
    fn tone_adds_ansi_escape() {
        let rendered = ColoredText::error("error:").render(true);
        assert!(rendered.starts_with("\u{1b}["));
        assert!(rendered.contains("error:"));
    }

    #[test]
    fn bold_plain_text_is_styled() {
        assert!(ColoredText::plain("Sigma").bold().render(true).contains("\u{1b}["));
    }

    #[test]
    fn unstyled_plain_text_is_untouched() {
        assert_eq!(ColoredText::plain("x").render(true), "x");
    }

    #[test]
    fn display_ignores_style() {
        assert_eq!(ColoredText::warning("warning:").bold().to_string(), "warning:");
    }
}
