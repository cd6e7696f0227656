//! Command context.
//!
//! Gathers the workspace config, API connector and session store that every
//! fetching command needs.

use tracing::debug;

use crate::core::api::HttpConnector;
use crate::core::config::{self, Config};
use crate::core::constants::DEFAULT_ENVIRONMENT;
use crate::core::domain::{Secret, SecretType};
use crate::core::fetch::{self, FetchParams, ResolveOptions};
use crate::core::session::Filesystem;
use crate::error::Result;

/// Everything a command needs to resolve secrets.
pub struct Context {
    pub params: FetchParams,
    pub connector: HttpConnector,
    pub sessions: Filesystem,
}

impl Context {
    /// Build the context from global CLI flags.
    ///
    /// `.bullpen.toml` is optional here; the user path reports its absence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `.bullpen.toml` exists but is invalid.
    pub fn new(token: Option<String>, environment: Option<String>) -> Result<Self> {
        let config = if Config::exists() {
            Some(Config::load()?)
        } else {
            None
        };

        let environment = environment
            .or_else(|| {
                config
                    .as_ref()
                    .map(|c| c.default_environment().to_string())
            })
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let connector = HttpConnector::new(config::api_url(config.as_ref()));
        debug!(api = connector.base_url(), environment = %environment, "context");

        Ok(Self {
            params: FetchParams {
                token,
                environment,
                workspace_id: config.map(|c| c.workspace.id),
            },
            connector,
            sessions: Filesystem::default_location(),
        })
    }

    /// Fetch, optionally expand, and apply personal overrides.
    ///
    /// # Errors
    ///
    /// See [`fetch::fetch_secrets`].
    pub fn resolve(&self, expand: bool) -> Result<Vec<Secret>> {
        fetch::resolve_secrets(
            &self.params,
            &self.connector,
            &self.sessions,
            ResolveOptions {
                expand,
                scope: SecretType::Personal,
            },
        )
    }
}
