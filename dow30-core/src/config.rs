//! Download configuration.
//!
//! The CLI always runs with `DownloadConfig::default()`. Library callers
//! (and tests) can point the output root elsewhere or load a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a download run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Parent of the per-range output directories.
    pub output_root: PathBuf,
    /// Split/dividend-adjust OHLC before writing.
    pub auto_adjust: bool,
    pub yahoo: YahooConfig,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("dow_data"),
            auto_adjust: true,
            yahoo: YahooConfig::default(),
        }
    }
}

impl DownloadConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse from TOML. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Same settings, different output root.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }
}

/// Yahoo Finance chart endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YahooConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query2.finance.yahoo.com/v8/finance/chart".into(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DownloadConfig::default();
        assert_eq!(c.output_root, PathBuf::from("dow_data"));
        assert!(c.auto_adjust);
        assert_eq!(c.yahoo.timeout_secs, 30);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = DownloadConfig::from_toml(
            r#"
output_root = "/tmp/prices"

[yahoo]
timeout_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(c.output_root, PathBuf::from("/tmp/prices"));
        assert!(c.auto_adjust);
        assert_eq!(c.yahoo.timeout_secs, 5);
        assert_eq!(c.yahoo.base_url, YahooConfig::default().base_url);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            DownloadConfig::from_toml("auto_adjust = \"yes\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DownloadConfig::from_file(Path::new("/nonexistent/dow30.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dow30.toml"));
    }
}
