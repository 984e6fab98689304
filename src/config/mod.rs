//! Configuration module for dofcalc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DOFCALC_*)
//! 3. Explicit `--config` file, or `./dofcalc.toml`
//! 4. User config (~/.config/dofcalc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{parse_with_warnings, with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CalculationConfig, CatalogConfig, ColorMode, Config, OutputConfig};
