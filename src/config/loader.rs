//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{SensorFormat, ZeissRatio};
use crate::error::ConfigError;
use crate::infrastructure::fs::dofcalc_config_dir;

use super::types::{ColorMode, Config};

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "dofcalc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for messages
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit path, then `./dofcalc.toml`, then the user config, then defaults.
///
/// An explicit path must exist. A discovered file that fails to parse is an
/// error as well, not a reason to fall back.
pub fn discover(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths(project_root)
            .into_iter()
            .find(|path| path.is_file()),
    };

    let (config, warnings) = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok((with_env_overrides(config), warnings))
}

fn candidate_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_dir) = dofcalc_config_dir() {
        paths.push(user_dir.join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (DOFCALC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply `DOFCALC_*` overrides read through `lookup`.
///
/// Unrecognized values are logged and ignored.
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // DOFCALC_ZEISS
    if let Some(name) = lookup("DOFCALC_ZEISS") {
        match ZeissRatio::from_name(&name) {
            Some(ratio) => {
                config.calculation.zeiss = ratio;
                config.calculation.coc_divisor = None;
            }
            None => tracing::warn!(value = %name, "ignoring unknown DOFCALC_ZEISS"),
        }
    }

    // DOFCALC_SENSOR
    if let Some(id) = lookup("DOFCALC_SENSOR") {
        match SensorFormat::from_id(&id) {
            Some(format) => {
                config.calculation.sensor = format;
                config.calculation.sensor_width = None;
                config.calculation.sensor_height = None;
            }
            None => tracing::warn!(value = %id, "ignoring unknown DOFCALC_SENSOR"),
        }
    }

    // DOFCALC_CATALOG
    if let Some(path) = lookup("DOFCALC_CATALOG") {
        if !path.trim().is_empty() {
            config.catalog.path = Some(PathBuf::from(path));
        }
    }

    // DOFCALC_COLOR
    if let Some(mode) = lookup("DOFCALC_COLOR") {
        match ColorMode::from_name(&mode) {
            Some(mode) => config.output.color = mode,
            None => tracing::warn!(value = %mode, "ignoring unknown DOFCALC_COLOR"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Every key the config understands, sections included
const KNOWN_KEYS: &[&str] = &[
    "calculation",
    "zeiss",
    "coc_divisor",
    "sensor",
    "sensor_width",
    "sensor_height",
    "catalog",
    "path",
    "output",
    "color",
    "unicode",
    "precision",
];

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, levenshtein(unknown, known)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= 2)
        .map(|(known, _)| known.to_string())
}

/// Edit distance over chars, one row at a time
fn levenshtein(from: &str, to: &str) -> usize {
    let to: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=to.len()).collect();

    for (i, from_char) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, to_char) in to.iter().enumerate() {
            let substitution = diagonal + usize::from(from_char != *to_char);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[to.len()]
}
