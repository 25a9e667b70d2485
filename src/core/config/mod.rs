//! Configuration types and management for townsplit-rs.
//!
//! The configuration is a small YAML document. Every field has a default, so
//! an empty file (or no file at all) is a valid configuration; the fetch
//! endpoint is the only value that must be supplied before the remote
//! candidate source can be used.

pub mod validation;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::errors::{Result, TownsplitError};

pub use validation::{
    validate_http_url, validate_non_empty, validate_positive_u64, validate_positive_usize,
};

/// File names probed in the working directory when no `--config` is given.
pub const IMPLICIT_CONFIG_FILES: &[&str] = &[".townsplit.yml", ".townsplit.yaml"];

/// Main configuration for townsplit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TownsplitConfig {
    /// Remote name generator settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Persistence settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote name generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URL of the name generator; each GET returns comma-separated names
    #[serde(default)]
    pub endpoint: String,

    /// Query parameter carrying the requested batch size
    #[serde(default = "FetchConfig::default_batch_param")]
    pub batch_param: String,

    /// Names requested per page
    #[serde(default = "FetchConfig::default_batch_size")]
    pub batch_size: usize,

    /// Extra attempts per page after the first failure
    #[serde(default = "FetchConfig::default_max_retries")]
    pub max_retries: u32,

    /// Pause between attempts, in milliseconds
    #[serde(default = "FetchConfig::default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Per-request timeout, in seconds
    #[serde(default = "FetchConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            batch_param: Self::default_batch_param(),
            batch_size: Self::default_batch_size(),
            max_retries: Self::default_max_retries(),
            retry_delay_ms: Self::default_retry_delay_ms(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl FetchConfig {
    fn default_batch_param() -> String {
        "count".to_string()
    }

    const fn default_batch_size() -> usize {
        50
    }

    const fn default_max_retries() -> u32 {
        3
    }

    const fn default_retry_delay_ms() -> u64 {
        500
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    /// Pause between attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parsed endpoint, failing when none is configured.
    pub fn endpoint_url(&self) -> Result<Url> {
        if self.endpoint.trim().is_empty() {
            return Err(TownsplitError::config_field(
                "no name generator endpoint configured (set fetch.endpoint or pass --endpoint)",
                "fetch.endpoint",
            ));
        }
        validate_http_url(&self.endpoint, "fetch.endpoint")
    }

    /// Validate fetch settings.
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.trim().is_empty() {
            validate_http_url(&self.endpoint, "fetch.endpoint")?;
        }
        validate_non_empty(&self.batch_param, "fetch.batch_param")?;
        validate_positive_usize(self.batch_size, "fetch.batch_size")?;
        validate_positive_u64(self.timeout_secs, "fetch.timeout_secs")?;
        Ok(())
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Persist vocabularies every N processed candidates while fetching (0 = only at the end)
    #[serde(default)]
    pub checkpoint_every: usize,
}

impl TownsplitConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            TownsplitError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text; an empty document yields the defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            TownsplitError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// First implicit configuration file present in `dir`
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.fetch.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = TownsplitConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch.batch_param, "count");
        assert_eq!(config.fetch.batch_size, 50);
        assert_eq!(config.fetch.retry_delay(), Duration::from_millis(500));
        assert_eq!(config.output.checkpoint_every, 0);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = TownsplitConfig::from_yaml_str(
            "fetch:\n  endpoint: http://localhost:8080/towns\n  batch_size: 10\n",
        )
        .unwrap();

        assert_eq!(config.fetch.endpoint, "http://localhost:8080/towns");
        assert_eq!(config.fetch.batch_size, 10);
        assert_eq!(config.fetch.max_retries, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = TownsplitConfig::from_yaml_str("\n").unwrap();
        assert_eq!(config, TownsplitConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = TownsplitConfig::default();
        config.fetch.batch_size = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            TownsplitError::Config { field: Some(ref f), .. } if f == "fetch.batch_size"
        ));

        let mut config = TownsplitConfig::default();
        config.fetch.endpoint = "file:///etc/passwd".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_url_requires_endpoint() {
        let config = FetchConfig::default();
        assert!(config.endpoint_url().is_err());

        let config = FetchConfig {
            endpoint: "https://names.example.com/generate".to_string(),
            ..FetchConfig::default()
        };
        assert_eq!(config.endpoint_url().unwrap().host_str(), Some("names.example.com"));
    }

    #[test]
    fn test_yaml_file_round_trip_and_discovery() {
        let dir = tempdir().unwrap();
        assert!(TownsplitConfig::discover(dir.path()).is_none());

        let mut config = TownsplitConfig::default();
        config.output.checkpoint_every = 25;
        let path = dir.path().join(".townsplit.yml");
        config.to_yaml_file(&path).unwrap();

        assert_eq!(TownsplitConfig::discover(dir.path()), Some(path.clone()));
        assert_eq!(TownsplitConfig::from_yaml_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TownsplitConfig::from_yaml_file("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, TownsplitError::Io { .. }));
    }
}
