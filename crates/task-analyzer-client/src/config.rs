/*
[INPUT]:  Optional YAML configuration file and TASK_ANALYZER__* environment variables
[OUTPUT]: Parsed client configuration
[POS]:    Configuration layer - service endpoint and UI settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use task_analyzer_adapter::{AnalyzerClient, ClientConfig, DEFAULT_BASE_URL, Strategy};

const ENV_PREFIX: &str = "TASK_ANALYZER";

/// Top-level configuration for the client
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and how to reach the analysis service
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base address; endpoints are resolved relative to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Unset means no client-side request timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: None,
        }
    }
}

/// Interactive defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiConfig {
    /// Strategy label preselected at startup
    #[serde(default = "default_strategy")]
    pub default_strategy: String,
    /// Seconds before an error notice disappears
    #[serde(default = "default_notice_ttl_secs")]
    pub notice_ttl_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            notice_ttl_secs: default_notice_ttl_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_strategy() -> String {
    Strategy::default().to_string()
}

fn default_notice_ttl_secs() -> u64 {
    5
}

impl AppConfig {
    /// Default config file location, e.g. `~/.config/task-analyzer/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("task-analyzer").join("config.yaml"))
    }

    /// Load from an optional YAML file layered under environment overrides.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
            }
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder
                        .add_source(File::from(default).format(FileFormat::Yaml).required(false));
                }
            }
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.service.base_url.trim().is_empty() {
            return Err(anyhow!("service.base_url must not be empty"));
        }
        if self.ui.default_strategy.trim().is_empty() {
            return Err(anyhow!("ui.default_strategy must not be empty"));
        }
        if self.ui.notice_ttl_secs == 0 {
            return Err(anyhow!("ui.notice_ttl_secs must be at least 1"));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.service.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: Duration::from_secs(self.service.connect_timeout_secs),
        }
    }

    pub fn build_client(&self) -> anyhow::Result<AnalyzerClient> {
        AnalyzerClient::with_config_and_base_url(self.client_config(), &self.service.base_url)
            .with_context(|| format!("create client for {}", self.service.base_url))
    }

    pub fn default_strategy(&self) -> Strategy {
        Strategy::new(self.ui.default_strategy.trim())
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.ui.notice_ttl_secs)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("failed to serialize config to YAML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let file = write_config("service:\n  base_url: http://analyzer.internal:8080/api/tasks/\n");
        let config = AppConfig::load(Some(file.path())).expect("load config");

        assert_eq!(config.service.base_url, "http://analyzer.internal:8080/api/tasks/");
        assert_eq!(config.service.connect_timeout_secs, 10);
        assert_eq!(config.service.request_timeout_secs, None);
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.default_strategy().as_str(), "smart_balance");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/task-analyzer.yaml")));
        assert!(err.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let mut config = AppConfig::default();
        config.ui.notice_ttl_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_roundtrip_through_loader() {
        let mut config = AppConfig::default();
        config.service.request_timeout_secs = Some(45);
        config.ui.default_strategy = "high_impact".to_string();
        let file = write_config(&config.to_yaml().expect("yaml"));

        let loaded = AppConfig::load(Some(file.path())).expect("load config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.client_config().timeout, Some(Duration::from_secs(45)));
        assert_eq!(loaded.notice_ttl(), Duration::from_secs(5));
    }
}
