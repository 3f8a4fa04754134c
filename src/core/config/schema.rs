//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$LANEGRAPH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/lanegraph/config.toml`
//! 3. `~/.lanegraph/config.toml`
//!
//! # Repo Config
//!
//! Located at `.git/lanegraph/config.toml`.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., a commit limit must be
//! positive).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// commits_limit = 1000
/// show_uncommitted = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Maximum number of rows a log walk produces
    pub commits_limit: Option<usize>,

    /// Whether a dirty working tree reserves the first lane
    pub show_uncommitted: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_commits_limit(self.commits_limit)
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// commits_limit = 250
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Per-repository override of the global commit limit
    pub commits_limit: Option<usize>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_commits_limit(self.commits_limit)
    }
}

fn validate_commits_limit(limit: Option<usize>) -> Result<(), ConfigError> {
    if limit == Some(0) {
        return Err(ConfigError::InvalidValue(
            "commits_limit must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
