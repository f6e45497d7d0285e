//! Project configuration: YAML file, validated on load.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::brands::{validate_brands, BrandsConfig};
use crate::ConfigError;

pub const DEFAULT_SENTIMENT_THRESHOLD: f64 = 0.25;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    pub keywords: KeywordsConfig,
    pub brands: BrandsConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Seed queries the collectors ran; the first seed labels the summary.
    pub seeds: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Label threshold: positive above it, negative below its negation.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where collectors dropped their item files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SENTIMENT_THRESHOLD,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_project_name() -> String {
    "SoV".to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_SENTIMENT_THRESHOLD
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Load and validate the project configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: ProjectConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    validate_brands(&config.brands)?;

    if config.keywords.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "keywords.seeds must list at least one seed query".to_string(),
        ));
    }

    let t = config.sentiment.threshold;
    if !(0.0..1.0).contains(&t) {
        return Err(ConfigError::Validation(format!(
            "sentiment.threshold must be in [0, 1), got {t}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r"
keywords:
  seeds: [smart fan]
brands:
  primary: [Atomberg]
  competitors: [Havells, Crompton]
";

    fn parse(yaml: &str) -> ProjectConfig {
        serde_yaml::from_str(yaml).expect("yaml should parse")
    }

    #[test]
    fn minimal_config_takes_defaults() {
        let config = parse(MINIMAL);
        validate_config(&config).expect("minimal config should validate");
        assert_eq!(config.project_name, "SoV");
        assert_eq!(config.sentiment.threshold, DEFAULT_SENTIMENT_THRESHOLD);
        assert_eq!(config.output.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn rejects_empty_seeds() {
        let config = parse(
            r"
keywords:
  seeds: []
brands:
  primary: [Atomberg]
",
        );
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("seeds"));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let config = parse(
            r"
keywords:
  seeds: [smart fan]
brands:
  primary: [Atomberg]
sentiment:
  threshold: 1.5
",
        );
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn rejects_missing_primary_brand() {
        let config = parse(
            r"
keywords:
  seeds: [smart fan]
brands:
  primary: []
  competitors: [Havells]
",
        );
        assert!(validate_config(&config).is_err());
    }
}
