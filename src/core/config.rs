//! Configuration file management.
//!
//! Handles reading and validating the `.bullpen.toml` workspace file, which
//! links a directory to a remote workspace for the logged-in user path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::{Environment, WorkspaceId};
use crate::error::{ConfigError, Result};

/// Workspace configuration stored in `.bullpen.toml`
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Which remote workspace this directory belongs to
    pub workspace: WorkspaceSection,
    /// Optional API overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiSection>,
}

/// `[workspace]` section
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkspaceSection {
    /// Remote workspace identifier
    pub id: WorkspaceId,
    /// Environment used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<Environment>,
}

/// `[api]` section
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSection {
    /// Base URL of the secrets service
    pub url: String,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.bullpen.toml` in the current directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        config.validate()?;

        debug!(workspace = %config.workspace.id, "config loaded");
        Ok(config)
    }

    /// Validate the configuration contents
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if the workspace id is empty.
    pub fn validate(&self) -> Result<()> {
        if self.workspace.id.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "workspace.id",
            }
            .into());
        }
        if let Some(api) = &self.api {
            if api.url.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "api.url" }.into());
            }
        }
        Ok(())
    }

    /// Environment used when the caller doesn't name one
    pub fn default_environment(&self) -> &str {
        self.workspace
            .default_environment
            .as_deref()
            .unwrap_or(constants::DEFAULT_ENVIRONMENT)
    }
}

/// Resolve the API base URL.
///
/// `BULLPEN_API_URL` wins over the config file, which wins over the default.
pub fn api_url(config: Option<&Config>) -> String {
    if let Ok(url) = std::env::var(constants::API_URL_ENV) {
        if !url.trim().is_empty() {
            return url;
        }
    }
    config
        .and_then(|c| c.api.as_ref())
        .map(|api| api.url.clone())
        .unwrap_or_else(|| constants::DEFAULT_API_URL.to_string())
}
