//! Configuration file support for snakecage-report.
//!
//! Provides YAML-based configuration through `snakecage-report.config.yml`
//! files, including data structures, file loading, and validation. Values
//! given on the command line take precedence over the file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::analysis_report::domain::RiskLevel;
use crate::application::dto::OutputFormat;
use crate::application::read_models::DisplayTimeZone;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "snakecage-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub fail_on: Option<String>,
    pub max_series_points: Option<usize>,
    pub timezone: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`; only valid after [`load_config_from_path`] succeeded.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// Parsed `fail_on`; only valid after [`load_config_from_path`] succeeded.
    pub fn fail_on_level(&self) -> Option<RiskLevel> {
        self.fail_on.as_deref().and_then(|l| l.parse().ok())
    }

    /// Parsed `timezone`; only valid after [`load_config_from_path`] succeeded.
    pub fn time_zone(&self) -> Option<DisplayTimeZone> {
        self.timezone.as_deref().and_then(|tz| tz.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!(
                "Invalid config: {}\n\n💡 Hint: 'format' must be one of html, markdown, json.",
                e
            );
        }
    }

    if let Some(level) = config.fail_on.as_deref() {
        if level.parse::<RiskLevel>().is_err() {
            bail!(
                "Invalid config: fail_on '{}' is not a risk level.\n\n💡 Hint: 'fail_on' must be one of low, medium, high.",
                level
            );
        }
    }

    if config.max_series_points == Some(0) {
        return Err(ReportError::Validation {
            message: "max_series_points must be a positive integer".to_string(),
        }
        .into());
    }

    if let Some(timezone) = config.timezone.as_deref() {
        if let Err(e) = timezone.parse::<DisplayTimeZone>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
fail_on: HIGH
max_series_points: 20
timezone: utc
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Markdown));
        assert_eq!(config.fail_on_level(), Some(RiskLevel::High));
        assert_eq!(config.max_series_points, Some(20));
        assert_eq!(config.time_zone(), Some(DisplayTimeZone::Utc));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from_path(&dir.path().join("missing.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "format: [unclosed\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_invalid_format() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: pdf\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Invalid format: pdf"));
    }

    #[test]
    fn test_load_config_rejects_unknown_fail_on() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "fail_on: unknown\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("fail_on 'unknown' is not a risk level"));
    }

    #[test]
    fn test_load_config_invalid_timezone() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timezone: mars\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Invalid timezone"));
    }

    #[test]
    fn test_load_config_rejects_zero_points() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "max_series_points: 0\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("max_series_points must be a positive integer"));
    }

    #[test]
    fn test_load_config_unknown_fields_are_kept_for_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: html\ntheme: dark\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("theme"));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.format.is_none());
    }
}
