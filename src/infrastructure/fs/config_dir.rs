//! Per-user directory for dofcalc files.
//!
//! Both the user config (`config.toml`) and the default lens catalog
//! (`lenses.json`) live here, so they always resolve to the same place:
//! 1. `$XDG_CONFIG_HOME/dofcalc` when the variable is set and non-empty
//! 2. `dirs::config_dir()/dofcalc` otherwise (e.g. `~/Library/Application Support` on macOS)

use std::path::PathBuf;

/// Environment variable checked before the platform config directory
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// `<config dir>/dofcalc`, or `None` if no config directory can be resolved
pub fn dofcalc_config_dir() -> Option<PathBuf> {
    dofcalc_config_dir_from(|var| std::env::var(var).ok(), dirs::config_dir)
}

pub(crate) fn dofcalc_config_dir_from(
    lookup: impl Fn(&str) -> Option<String>,
    platform: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    lookup(XDG_CONFIG_HOME_VAR)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(platform)
        .map(|dir| dir.join("dofcalc"))
}
