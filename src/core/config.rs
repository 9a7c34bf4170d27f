//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Delegated command used when nothing else is configured
pub const DEFAULT_COMMAND: &str = "python -m unittest tests.test_netx";

/// Scheme prefixed to bare hostnames
pub const DEFAULT_SCHEME: &str = "http";

/// Environment variable backing `--command`
pub const COMMAND_ENV: &str = "NETX_RUNTESTS_COMMAND";

/// Wrapper configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command line of the external test module
    pub command: Option<String>,

    /// Scheme for `-s` values given as a bare hostname
    pub default_scheme: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (applied by the accessors)

        // 2. Global user config (~/.config/netx-runtests/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. NETX_RUNTESTS_COMMAND and --command come in through `Cli::command`

        config
    }

    /// Read a single config file, skipping it if absent or unparsable
    pub fn read_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config");
                return None;
            }
        };
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "netx-runtests")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.default_scheme.is_some() {
            self.default_scheme = other.default_scheme;
        }
    }

    /// Get the delegated command line
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_COMMAND)
    }

    /// Get the scheme for bare hostnames
    pub fn default_scheme(&self) -> &str {
        self.default_scheme
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SCHEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.command(), DEFAULT_COMMAND);
        assert_eq!(config.default_scheme(), "http");
    }

    #[test]
    fn test_read_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "command: pytest tests\ndefault_scheme: https\n").unwrap();

        let config = Config::read_file(&path).unwrap();
        assert_eq!(config.command(), "pytest tests");
        assert_eq!(config.default_scheme(), "https");
    }

    #[test]
    fn test_read_file_missing_or_invalid() {
        let tmp = TempDir::new().unwrap();
        assert!(Config::read_file(&tmp.path().join("absent.yaml")).is_none());

        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "command: [unterminated\n").unwrap();
        assert!(Config::read_file(&path).is_none());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut config = Config {
            command: Some("first".into()),
            default_scheme: Some("https".into()),
        };
        config.merge(Config {
            command: Some("second".into()),
            default_scheme: None,
        });
        assert_eq!(config.command(), "second");
        assert_eq!(config.default_scheme(), "https");
    }
}
