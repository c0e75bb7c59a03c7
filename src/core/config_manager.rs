// src/core/config_manager.rs
//! Layered configuration: defaults, then an optional YAML file, then environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::render::RenderOptions;

pub const DEFAULT_CONFIG_FILE: &str = "skillscope.yaml";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    pub api_url: String,
    /// No timeout means the transport default
    pub timeout_seconds: Option<u64>,
    pub notification_ttl_secs: u64,
    pub port: u16,
    pub extended_learning_plan: bool,
    pub log_file: Option<PathBuf>,
}

/// Shape of the YAML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    timeout_seconds: Option<u64>,
    notification_ttl_secs: Option<u64>,
    port: Option<u16>,
    extended_learning_plan: Option<bool>,
    log_file: Option<PathBuf>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
            notification_ttl_secs: DEFAULT_NOTIFICATION_TTL_SECS,
            port: DEFAULT_PORT,
            extended_learning_plan: false,
            log_file: None,
        }
    }
}

impl ConfigManager {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `skillscope.yaml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        match path {
            Some(path) => config.merge_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    config.merge_file(default_path)?;
                }
            }
        }

        config.merge_env(|key| std::env::var(key).ok())?;
        info!("Configuration loaded, analysis service: {}", config.api_url);
        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        self.merge_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge_yaml(&mut self, content: &str) -> Result<()> {
        let file: ConfigFile = if content.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(content)?
        };

        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if file.timeout_seconds.is_some() {
            self.timeout_seconds = file.timeout_seconds;
        }
        if let Some(ttl) = file.notification_ttl_secs {
            self.notification_ttl_secs = ttl;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(extended) = file.extended_learning_plan {
            self.extended_learning_plan = extended;
        }
        if file.log_file.is_some() {
            self.log_file = file.log_file;
        }
        Ok(())
    }

    fn merge_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SKILLSCOPE_API_URL") {
            self.api_url = url;
        }
        if let Some(port) = lookup("SKILLSCOPE_PORT") {
            self.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("SKILLSCOPE_PORT must be a valid port number"))?;
        }
        if let Some(secs) = lookup("SKILLSCOPE_TIMEOUT_SECS") {
            self.timeout_seconds = Some(secs.parse().map_err(|_| {
                anyhow::anyhow!("SKILLSCOPE_TIMEOUT_SECS must be a number of seconds")
            })?);
        }
        Ok(())
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            extended_learning_plan: self.extended_learning_plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ConfigManager::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.notification_ttl(), Duration::from_secs(8));
        assert_eq!(config.timeout_seconds, None);
        assert!(!config.render_options().extended_learning_plan);
    }

    #[test]
    fn test_yaml_overrides_defaults() {
        let mut config = ConfigManager::default();
        config
            .merge_yaml("api_url: http://analysis:9000\nport: 9090\nextended_learning_plan: true\n")
            .unwrap();

        assert_eq!(config.api_url, "http://analysis:9000");
        assert_eq!(config.port, 9090);
        assert!(config.extended_learning_plan);
        assert_eq!(config.notification_ttl_secs, 8);
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        let mut config = ConfigManager::default();
        assert!(config.merge_yaml("api_ulr: typo\n").is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SKILLSCOPE_API_URL", "http://env:1234"),
            ("SKILLSCOPE_TIMEOUT_SECS", "30"),
        ]);
        let mut config = ConfigManager::default();
        config.merge_yaml("api_url: http://file:1\n").unwrap();
        config
            .merge_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_url, "http://env:1234");
        assert_eq!(config.timeout_seconds, Some(30));
    }

    #[test]
    fn test_env_bad_port() {
        let mut config = ConfigManager::default();
        let result = config.merge_env(|key| (key == "SKILLSCOPE_PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "notification_ttl_secs: 3").unwrap();

        let config = ConfigManager::load(Some(file.path())).unwrap();
        assert_eq!(config.notification_ttl(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        assert!(ConfigManager::load(Some(Path::new("/nonexistent/skillscope.yaml"))).is_err());
    }
}
