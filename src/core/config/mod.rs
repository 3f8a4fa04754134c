//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! lanegraph has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$LANEGRAPH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/lanegraph/config.toml`
//! 3. `~/.lanegraph/config.toml`
//!
//! # Repo Config Location
//!
//! `<git-dir>/lanegraph/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use lanegraph::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! let config = result.config;
//! println!("Limit: {}", config.commits_limit());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default number of rows produced by a log walk.
pub const DEFAULT_COMMITS_LIMIT: usize = 1000;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules automatically. Repo config overrides
/// global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `git_dir` is provided, also loads repo-specific config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(git_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path) = Self::load_global()?;

        let (repo, repo_path) = match git_dir {
            Some(dir) => Self::load_repo(dir)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                repo,
                global_path,
                repo_path,
            },
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $LANEGRAPH_CONFIG
        if let Ok(path) = std::env::var("LANEGRAPH_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_toml(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/lanegraph/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("lanegraph/config.toml");
            if path.exists() {
                let config = Self::read_toml(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.lanegraph/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".lanegraph/config.toml");
            if path.exists() {
                let config = Self::read_toml(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Load repository configuration from the git directory.
    fn load_repo(git_dir: &Path) -> Result<(Option<RepoConfig>, Option<PathBuf>), ConfigError> {
        let path = Self::repo_config_path(git_dir);
        if !path.exists() {
            return Ok((None, None));
        }

        let config = Self::read_toml(&path)?;
        Ok((Some(config), Some(path)))
    }

    /// Read and parse a config file.
    fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for repo config.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("lanegraph/config.toml")
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the maximum number of rows a log walk produces.
    ///
    /// Defaults to [`DEFAULT_COMMITS_LIMIT`] if not configured.
    pub fn commits_limit(&self) -> usize {
        self.repo
            .as_ref()
            .and_then(|r| r.commits_limit)
            .or(self.global.commits_limit)
            .unwrap_or(DEFAULT_COMMITS_LIMIT)
    }

    /// Check if uncommitted changes should reserve the first lane.
    ///
    /// Defaults to `true` if not configured.
    pub fn show_uncommitted(&self) -> bool {
        self.global.show_uncommitted.unwrap_or(true)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_files() {
        let config = Config::default();
        assert_eq!(config.commits_limit(), DEFAULT_COMMITS_LIMIT);
        assert!(config.show_uncommitted());
        assert!(config.repo_config_loaded_from().is_none());
    }

    #[test]
    fn load_repo_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("lanegraph");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "commits_limit = 42\n").unwrap();

        let result = Config::load(Some(temp.path())).unwrap();
        let config = result.config;

        assert_eq!(config.commits_limit(), 42);
        assert_eq!(
            config.repo_config_loaded_from(),
            Some(Config::repo_config_path(temp.path()).as_path())
        );
    }

    #[test]
    fn missing_repo_config_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(temp.path())).unwrap();
        assert!(result.config.repo.is_none());
    }

    #[test]
    fn invalid_repo_limit_rejected() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("lanegraph");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "commits_limit = 0\n").unwrap();

        assert!(matches!(
            Config::load(Some(temp.path())),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn malformed_repo_config_rejected() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("lanegraph");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "commits_limit = \"many\"\n").unwrap();

        assert!(matches!(
            Config::load(Some(temp.path())),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn precedence_repo_overrides_global() {
        let config = Config {
            global: GlobalConfig {
                commits_limit: Some(10),
                show_uncommitted: Some(false),
            },
            repo: Some(RepoConfig {
                commits_limit: Some(20),
            }),
            global_path: None,
            repo_path: None,
        };

        assert_eq!(config.commits_limit(), 20);
        assert!(!config.show_uncommitted());
    }

    #[test]
    fn global_used_when_repo_unset() {
        let config = Config {
            global: GlobalConfig {
                commits_limit: Some(10),
                ..Default::default()
            },
            repo: Some(RepoConfig::default()),
            global_path: None,
            repo_path: None,
        };

        assert_eq!(config.commits_limit(), 10);
    }
}
