//! Configuration for visualization sessions.
//!
//! YAML documents with every field optional; missing fields take their
//! defaults. Precedence is CLI > file > defaults, applied by the binary.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithms::{AlgorithmId, Value};
use crate::error::{Error, Result};
use crate::mode3d::Mode3dLimits;
use crate::theme::Theme;

/// Array and display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    /// Registry id of the algorithm selected at start.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Desired array size.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Upper bound of the size control.
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Random arrays draw values from `1..=max_value`.
    #[serde(default = "default_max_value")]
    pub max_value: Value,

    /// Bar container width in pixels, padding already removed.
    #[serde(default = "default_container_width")]
    pub container_width: u32,

    /// Start on the dark theme.
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_algorithm() -> String {
    AlgorithmId::default().as_str().to_string()
}
fn default_size() -> usize {
    10
}
fn default_max_size() -> usize {
    50
}
fn default_max_value() -> Value {
    100
}
fn default_container_width() -> u32 {
    800
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            size: default_size(),
            max_size: default_max_size(),
            max_value: default_max_value(),
            container_width: default_container_width(),
            dark_mode: false,
        }
    }
}

/// Lifetimes of user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningConfig {
    /// How long the 3D requirements warning is shown.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// How long the auto-adjust offer stays open.
    #[serde(default = "default_prompt_ms")]
    pub prompt_ms: u64,
}

fn default_duration_ms() -> u64 {
    5000
}
fn default_prompt_ms() -> u64 {
    3000
}

impl Default for WarningConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            prompt_ms: default_prompt_ms(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Array and display settings.
    #[serde(default)]
    pub visualization: VisualizationConfig,

    /// 3D eligibility limits.
    #[serde(default)]
    pub mode3d: Mode3dLimits,

    /// Notice lifetimes.
    #[serde(default)]
    pub warnings: WarningConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            visualization: VisualizationConfig::default(),
            mode3d: Mode3dLimits::default(),
            warnings: WarningConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let vis = &self.visualization;
        if vis.max_size == 0 {
            return Err(invalid("visualization.max_size", "must be at least 1"));
        }
        if vis.size > vis.max_size {
            return Err(invalid(
                "visualization.size",
                &format!("{} exceeds max_size {}", vis.size, vis.max_size),
            ));
        }
        if vis.max_value == 0 {
            return Err(invalid("visualization.max_value", "must be at least 1"));
        }
        if AlgorithmId::from_str(&vis.algorithm).is_err() {
            return Err(invalid(
                "visualization.algorithm",
                &format!("unknown algorithm '{}'", vis.algorithm),
            ));
        }
        if self.mode3d.max_reduction > self.mode3d.max_value {
            return Err(invalid(
                "mode3d.max_reduction",
                "must not exceed mode3d.max_value",
            ));
        }
        Ok(())
    }

    /// The configured starting algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] for an id not in the registry.
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        self.visualization.algorithm.parse()
    }

    /// The configured starting theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.visualization.dark_mode)
    }

    /// How long the 3D requirements warning is shown.
    #[must_use]
    pub fn warning_duration(&self) -> Duration {
        Duration::from_millis(self.warnings.duration_ms)
    }

    /// How long the auto-adjust offer stays open.
    #[must_use]
    pub fn prompt_duration(&self) -> Duration {
        Duration::from_millis(self.warnings.prompt_ms)
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.visualization.size, 10);
        assert_eq!(config.visualization.max_size, 50);
        assert_eq!(config.mode3d.max_length, 10);
        assert_eq!(config.mode3d.max_value, 20);
        assert_eq!(config.algorithm().unwrap(), AlgorithmId::Bubble);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
version: 1
visualization:
  algorithm: quick
  size: 8
  max_value: 40
  dark_mode: true
mode3d:
  max_length: 6
warnings:
  duration_ms: 2000
"#;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.algorithm().unwrap(), AlgorithmId::Quick);
        assert_eq!(config.visualization.size, 8);
        assert_eq!(config.visualization.max_value, 40);
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.mode3d.max_length, 6);
        assert_eq!(config.mode3d.max_value, 20);
        assert_eq!(config.warning_duration(), Duration::from_millis(2000));
        assert_eq!(config.prompt_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
visualization:
  size: not_a_number
"#;

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_rejects_unknown_algorithm() {
        let err = Config::parse("visualization:\n  algorithm: bogo\n").unwrap_err();
        assert!(
            matches!(err, Error::ConfigInvalid { ref key, .. } if key == "visualization.algorithm")
        );
    }

    #[test]
    fn test_config_rejects_size_over_max() {
        let err = Config::parse("visualization:\n  size: 60\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { ref key, .. } if key == "visualization.size"));
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "visualization:\n  algorithm: insertion").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.algorithm().unwrap(), AlgorithmId::Insertion);
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = Config::load("/nonexistent/sortviz.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = Config::load_or_default("/nonexistent/path");
        assert_eq!(config.version, 1);
    }
}
