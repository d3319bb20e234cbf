//! Tests for config module.

use super::*;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

// ==================== Duration parsing tests ====================

#[test]
fn test_parse_duration_seconds() {
    let d = duration::parse_duration("10s").unwrap();
    assert_eq!(d, Duration::from_secs(10));
}

#[test]
fn test_parse_duration_minutes() {
    let d = duration::parse_duration("2m").unwrap();
    assert_eq!(d, Duration::from_secs(120));
}

#[test]
fn test_parse_duration_milliseconds() {
    let d = duration::parse_duration("500ms").unwrap();
    assert_eq!(d, Duration::from_millis(500));
}

#[test]
fn test_parse_duration_bare_number_is_seconds() {
    let d = duration::parse_duration("3").unwrap();
    assert_eq!(d, Duration::from_secs(3));
}

#[test]
fn test_parse_duration_fractional() {
    let d = duration::parse_duration("1.5s").unwrap();
    assert_eq!(d, Duration::from_millis(1500));
}

#[test]
fn test_parse_duration_empty() {
    let d = duration::parse_duration("").unwrap();
    assert_eq!(d, Duration::ZERO);
}

#[test]
fn test_parse_duration_invalid_unit() {
    let result = duration::parse_duration("10x");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("unknown duration unit"));
}

// ==================== YAML field loading tests ====================

/// Parse config from YAML string (for testing).
fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

#[test]
fn test_load_minimal() {
    let yaml = r#"
app:
  name: tipsheet
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.name, "tipsheet");
    assert_eq!(cfg.app.log_level, None);
    assert_eq!(cfg.sheet.results_url, None);
    assert_eq!(cfg.sheet.timeout, Duration::ZERO);
    assert!(cfg.calculator.is_none());
}

#[test]
fn test_load_full() {
    let yaml = r#"
app:
  name: tipsheet
  log_level: debug

sheet:
  results_url: https://example.com/results.csv
  testimonials_url: https://example.com/testimonials.csv
  timeout: 5s

calculator:
  default_unit_value: 10
  default_start_month: August 2025
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.log_level, Some("debug".to_string()));
    assert_eq!(
        cfg.sheet.results_url,
        Some("https://example.com/results.csv".to_string())
    );
    assert_eq!(cfg.sheet.timeout, Duration::from_secs(5));

    let calc = cfg.calculator.unwrap();
    assert_eq!(calc.default_unit_value, Some("10".parse().unwrap()));
    assert_eq!(calc.default_start_month, Some("August 2025".to_string()));
}

#[test]
fn test_load_from_file() {
    let yaml = r#"
app:
  name: tipsheet

sheet:
  timeout: 2s
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.app.name, "tipsheet");
    assert_eq!(cfg.sheet.timeout, Duration::from_secs(2));
}

#[test]
fn test_load_missing_file() {
    let result = Config::load("/nonexistent/config.yaml");
    assert!(matches!(result, Err(ConfigError::ReadFile(_))));
}

// ==================== Environment override tests ====================

#[test]
fn test_env_overrides_sheet_urls() {
    let yaml = r#"
app:
  name: tipsheet

sheet:
  results_url: https://example.com/old.csv
"#;
    let mut cfg = from_yaml(yaml).unwrap();

    // Set env vars (unsafe because modifying env is not thread-safe)
    unsafe {
        env::set_var("RESULTS_SHEET_URL", "https://example.com/new.csv");
        env::set_var("TESTIMONIALS_SHEET_URL", "https://example.com/quotes.csv");
    }

    cfg.load_urls_from_env();

    assert_eq!(
        cfg.sheet.results_url,
        Some("https://example.com/new.csv".to_string())
    );
    assert_eq!(
        cfg.sheet.testimonials_url,
        Some("https://example.com/quotes.csv".to_string())
    );

    // Cleanup
    unsafe {
        env::remove_var("RESULTS_SHEET_URL");
        env::remove_var("TESTIMONIALS_SHEET_URL");
    }
}

// ==================== Validation tests ====================

#[test]
fn test_validate_empty_app_name() {
    let yaml = r#"
app:
  name: ""
"#;
    let cfg = from_yaml(yaml).unwrap();
    let result = cfg.validate();
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_empty_results_url() {
    let yaml = r#"
app:
  name: tipsheet

sheet:
  results_url: ""
"#;
    let cfg = from_yaml(yaml).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_validate_negative_unit_value() {
    let yaml = r#"
app:
  name: tipsheet

calculator:
  default_unit_value: -5
"#;
    let cfg = from_yaml(yaml).unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("default_unit_value"));
}

#[test]
fn test_validate_ok() {
    let yaml = r#"
app:
  name: tipsheet

calculator:
  default_unit_value: 0
"#;
    let cfg = from_yaml(yaml).unwrap();
    assert!(cfg.validate().is_ok());
}
