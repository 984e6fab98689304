use dofcalc::config::{ColorMode, Config};
use dofcalc::presentation::Formatter;

use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    pub precision: usize,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorMode>, config: &Config) -> Self {
        let caps = TerminalCapabilities::detect();
        Self::from_caps(json, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorMode>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            color: color && !json,
            unicode,
            precision: config.output.precision,
        }
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.precision, self.unicode)
    }
}
