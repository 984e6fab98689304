//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::{load_with_warnings, parse_with_warnings, with_overrides_from};
use super::types::*;
use crate::domain::value_objects::{CocDivisor, SensorFormat, ZeissRatio};
use crate::error::ConfigError;

fn parse(toml: &str) -> Config {
    let (config, warnings) = parse_with_warnings(toml, Path::new("dofcalc.toml")).unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    config
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.calculation.zeiss, ZeissRatio::Modern);
    assert_eq!(config.calculation.sensor, SensorFormat::FullFrame);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
    assert_eq!(config.output.precision, 1);
    assert!(config.catalog.path.is_none());

    assert_eq!(config.sensor().unwrap().width(), 36.0);
    assert_eq!(
        config.coc_divisor().unwrap(),
        CocDivisor::Zeiss(ZeissRatio::Modern)
    );
}

#[test]
fn test_config_parse_toml() {
    let config = parse(
        r#"
[calculation]
zeiss = "classic"
sensor = "aps-c"

[catalog]
path = "/tmp/lenses.json"

[output]
color = "never"
unicode = false
precision = 2
"#,
    );

    assert_eq!(config.calculation.zeiss, ZeissRatio::Classic);
    assert_eq!(config.calculation.sensor, SensorFormat::ApsC);
    assert_eq!(config.catalog_path(), PathBuf::from("/tmp/lenses.json"));
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
    assert_eq!(config.output.precision, 2);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = parse("[output]\nprecision = 3\n");
    assert!(config.output.unicode);
    assert_eq!(config.output.precision, 3);
    assert_eq!(config.calculation, CalculationConfig::default());
}

#[test]
fn test_custom_divisor_overrides_zeiss() {
    let config = parse("[calculation]\nzeiss = \"classic\"\ncoc_divisor = 1250.0\n");
    assert_eq!(config.coc_divisor().unwrap().value(), 1250.0);
}

#[test]
fn test_invalid_custom_divisor_is_rejected() {
    let config = parse("[calculation]\ncoc_divisor = 0.0\n");
    assert!(matches!(
        config.coc_divisor(),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_custom_sensor_overrides_format() {
    let config = parse("[calculation]\nsensor = \"one-inch\"\nsensor_width = 44.0\nsensor_height = 33.0\n");
    let sensor = config.sensor().unwrap();
    assert_eq!(sensor.width(), 44.0);
    assert_eq!(sensor.height(), 33.0);
}

#[test]
fn test_custom_sensor_needs_both_dimensions() {
    let config = parse("[calculation]\nsensor_width = 44.0\n");
    assert!(matches!(
        config.sensor(),
        Err(ConfigError::MissingKey {
            key: "calculation.sensor_width",
            ..
        })
    ));
}

#[test]
fn test_custom_sensor_must_be_positive() {
    let config = parse("[calculation]\nsensor_width = -1.0\nsensor_height = 24.0\n");
    assert!(matches!(config.sensor(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_unknown_keys_become_warnings() {
    let toml = "[calculation]\nzeis = \"classic\"\n\n[output]\nprecison = 2\nfancy = true\n";
    let (config, warnings) = parse_with_warnings(toml, Path::new("dofcalc.toml")).unwrap();

    assert_eq!(config.calculation.zeiss, ZeissRatio::Modern);
    assert_eq!(warnings.len(), 3);

    assert_eq!(warnings[0].key, "zeis");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("zeiss"));

    assert_eq!(warnings[1].key, "precison");
    assert_eq!(warnings[1].suggestion.as_deref(), Some("precision"));

    assert_eq!(warnings[2].key, "fancy");
    assert_eq!(warnings[2].suggestion, None);
    assert_eq!(
        warnings[0].to_string(),
        "unknown config key 'zeis' in dofcalc.toml:2 (did you mean 'zeiss'?)"
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = parse_with_warnings("[calculation]\nzeiss = \"fancy\"\n", Path::new("x.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_env_overrides() {
    let config = with_overrides_from(
        parse("[calculation]\ncoc_divisor = 1250.0\nsensor_width = 44.0\nsensor_height = 33.0\n"),
        env(&[
            ("DOFCALC_ZEISS", "traditional"),
            ("DOFCALC_SENSOR", "m43"),
            ("DOFCALC_CATALOG", "/data/lenses.json"),
            ("DOFCALC_COLOR", "always"),
        ]),
    );

    assert_eq!(
        config.coc_divisor().unwrap(),
        CocDivisor::Zeiss(ZeissRatio::Traditional)
    );
    assert_eq!(config.sensor().unwrap(), SensorFormat::MicroFourThirds.sensor());
    assert_eq!(config.catalog_path(), PathBuf::from("/data/lenses.json"));
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_unknown_env_values_are_ignored() {
    let config = with_overrides_from(
        Config::default(),
        env(&[("DOFCALC_ZEISS", "zeiss"), ("DOFCALC_COLOR", "sometimes")]),
    );
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dofcalc.toml");
    fs::write(&path, "[output]\nunicode = false\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();
    assert!(!config.output.unicode);
    assert!(warnings.is_empty());
}

#[test]
fn test_discover_explicit_path_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        Config::discover(Some(&missing), None),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_discover_prefers_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("dofcalc.toml"),
        "[output]\nprecision = 4\n",
    )
    .unwrap();

    let (config, warnings) = Config::discover(None, Some(dir.path())).unwrap();
    assert_eq!(config.output.precision, 4);
    assert!(warnings.is_empty());
}
