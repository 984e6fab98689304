use dofcalc::config::ConfigWarning;

use crate::ui::text::ColoredText;

pub fn render_config_warning(warning: &ConfigWarning, supports_color: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::warning("warning:").bold().render(supports_color),
        warning
    )
}
