//! Configuration management for `tk`.
//!
//! Configuration is read from `<workspace>/config.yaml`; every field is
//! optional. Command-line flags override the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tasks_lib::StoreOptions;

use crate::error::{AppError, Result};

/// Default workspace directory, relative to the current directory.
pub const DEFAULT_DIR: &str = ".tasks";

/// Name of the config file inside the workspace.
pub const CONFIG_FILE: &str = "config.yaml";

/// Template written by `tk init`.
pub const CONFIG_TEMPLATE: &str = r"# Task list configuration
# storage_key: tasks
# tk flushes pending writes before it exits, so debounce_ms only
# affects long-lived hosts.
# debounce_ms: 300
# log_filter: warn
";

/// Workspace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage key; the snapshot lives in `<workspace>/<storage_key>.json`.
    pub storage_key: String,
    /// Quiet period before a pending write fires. `tk` runs one operation
    /// per process and flushes on exit, so this only matters to long-lived
    /// hosts reusing the same settings.
    pub debounce_ms: u64,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let options = StoreOptions::default();
        Self {
            storage_key: options.key,
            debounce_ms: u64::try_from(options.debounce.as_millis()).unwrap_or(300),
            log_filter: None,
        }
    }
}

impl Config {
    /// Load `<dir>/config.yaml`, falling back to defaults if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `Yaml` if the file exists but cannot be parsed, `Config` if a
    /// value is invalid, or `Io` if it cannot be read.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let config = match fs::read_to_string(&path) {
            Ok(text) if is_blank_yaml(&text) => Self::default(),
            Ok(text) => serde_yaml::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(AppError::Io(e)),
        };
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("storage_key cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(key) = &overrides.storage_key {
            self.storage_key.clone_from(key);
        }
        self
    }

    /// Options for the task store.
    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            key: self.storage_key.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

/// True if `text` holds nothing but comments and whitespace.
fn is_blank_yaml(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dir: Option<PathBuf>,
    pub storage_key: Option<String>,
}

impl CliOverrides {
    /// Workspace directory, defaulting to `.tasks`.
    #[must_use]
    pub fn workspace_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), CONFIG_TEMPLATE).unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "debounce_ms: 50\n").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.store_options().debounce, Duration::from_millis(50));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "debounce_ms: [nope").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(AppError::Yaml(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "storage_key: ''\n").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(AppError::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let overrides = CliOverrides {
            dir: None,
            storage_key: Some("work".to_string()),
        };
        let config = Config::default().with_overrides(&overrides);
        assert_eq!(config.store_options().key, "work");
        assert_eq!(overrides.workspace_dir(), PathBuf::from(".tasks"));
    }
}
