//! What the attached terminal can show: color, and whether `∞` and `✓` render.

use is_terminal::IsTerminal;

/// Variables set by common CI runners; colored logs there are rarely wanted
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
    "TEAMCITY_VERSION",
];

/// Checked in precedence order
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Inspect the process environment and stdout
    pub fn detect() -> Self {
        Self::from_env(|var| std::env::var(var).ok(), std::io::stdout().is_terminal())
    }

    pub(crate) fn from_env(lookup: impl Fn(&str) -> Option<String>, stdout_tty: bool) -> Self {
        let dumb = lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = lookup("NO_COLOR").is_some();

        Self {
            supports_color: stdout_tty && !dumb && !no_color,
            supports_unicode: !dumb && locale_allows_unicode(&lookup),
            is_ci: CI_MARKERS.iter().any(|var| lookup(var).is_some()),
        }
    }
}

/// The first locale variable that is set decides; unset means unicode
fn locale_allows_unicode(lookup: &impl Fn(&str) -> Option<String>) -> bool {
    let Some(locale) = LOCALE_VARS.iter().find_map(|var| lookup(var)) else {
        return true;
    };
    let locale = locale.to_ascii_lowercase();
    !(locale == "c" || locale == "posix")
}
