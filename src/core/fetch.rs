//! Secret fetch orchestration.
//!
//! Picks the authentication path, obtains the workspace key and the encrypted
//! secrets from the API, and decrypts them.
//!
//! ```text
//! token path:  token ──parse──▶ bearer ──▶ token details ──▶ WorkspaceKey ─┐
//!                                                                         ├─▶ decrypt_secrets
//! user path:   session ──jwt──▶ encrypted workspace key ──▶ WorkspaceKey ─┘
//! ```
//!
//! Both paths feed the same list decryption, so secrets mean the same thing
//! regardless of how the caller authenticated.

use tracing::{debug, info};

use crate::core::api::Connector;
use crate::core::cipher;
use crate::core::constants::TOKEN_ENV;
use crate::core::domain::{EncryptedSecret, Secret, SecretType, ServiceToken, Session, WorkspaceKey};
use crate::core::session::SessionStore;
use crate::core::{expand, merge};
use crate::error::{ConfigError, Error, Field, Result};

/// What to fetch and with which credentials.
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    /// Service token; falls back to `BULLPEN_TOKEN` when absent.
    pub token: Option<String>,
    /// Environment slug (user path only; a token carries its own).
    pub environment: String,
    /// Workspace id (user path only).
    pub workspace_id: Option<String>,
}

/// Post-processing applied by [`resolve_secrets`].
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Expand `${NAME}` references.
    pub expand: bool,
    /// Scope whose values win when a key has both.
    pub scope: SecretType,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            expand: true,
            scope: SecretType::Personal,
        }
    }
}

/// The service token to use, if any.
///
/// An explicit non-empty token wins over the `BULLPEN_TOKEN` variable.
pub fn resolve_token(explicit: Option<&str>) -> Option<String> {
    choose_token(explicit, std::env::var(TOKEN_ENV).ok())
}

/// An empty or blank token counts as absent on either side.
fn choose_token(explicit: Option<&str>, from_env: Option<String>) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .or_else(|| {
            from_env
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty())
        })
}

/// Fetch and decrypt every secret visible to the caller.
///
/// # Errors
///
/// - `TokenError::Malformed` if the token doesn't have four segments
/// - `SessionError::NotAuthenticated` if there is no token and no session
/// - `ConfigError::NotInitialized` if the user path has no workspace id
/// - `RemoteError` if an API call fails
/// - `CipherError` (possibly inside `Error::Secret`) if decryption fails
pub fn fetch_secrets(
    params: &FetchParams,
    connector: &dyn Connector,
    sessions: &dyn SessionStore,
) -> Result<Vec<Secret>> {
    if let Some(token) = resolve_token(params.token.as_deref()) {
        debug!("fetching secrets with service token");
        return fetch_with_token(&token, connector);
    }

    debug!("fetching secrets with logged in user session");
    let session = sessions.current()?;
    let workspace_id = params
        .workspace_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or(ConfigError::NotInitialized)?;

    fetch_with_session(&session, workspace_id, &params.environment, connector)
}

/// Token path.
///
/// # Errors
///
/// See [`fetch_secrets`].
pub fn fetch_with_token(raw_token: &str, connector: &dyn Connector) -> Result<Vec<Secret>> {
    let token = ServiceToken::parse(raw_token)?;
    let api = connector.connect(token.bearer())?;

    let details = api
        .token_details()
        .map_err(|e| e.context("unable to get service token details"))?;
    debug!(workspace = %details.workspace, environment = %details.environment, "token details");

    let key = cipher::workspace_key_from_token(&token, &details)
        .map_err(|e| e.context("unable to decrypt the workspace key"))?;

    let encrypted = api
        .encrypted_secrets(&details.workspace, &details.environment)
        .map_err(|e| e.context("unable to fetch secrets"))?;

    decrypt_secrets(&key, &encrypted)
}

/// Logged-in user path.
///
/// # Errors
///
/// See [`fetch_secrets`].
pub fn fetch_with_session(
    session: &Session,
    workspace_id: &str,
    environment: &str,
    connector: &dyn Connector,
) -> Result<Vec<Secret>> {
    let api = connector.connect(&session.jwt)?;

    let envelope = api
        .encrypted_workspace_key(workspace_id)
        .map_err(|e| e.context("unable to get your encrypted workspace key"))?;

    let key = cipher::workspace_key_from_session(session, &envelope)
        .map_err(|e| e.context("unable to decrypt the workspace key"))?;

    let encrypted = api
        .encrypted_secrets(workspace_id, environment)
        .map_err(|e| e.context("unable to fetch secrets"))?;

    decrypt_secrets(&key, &encrypted)
}

/// Decrypt a batch of secrets with the workspace key.
///
/// All or nothing: the first failing record aborts the batch.
///
/// # Errors
///
/// Returns `Error::Secret` naming the failing record and field.
pub fn decrypt_secrets(key: &WorkspaceKey, encrypted: &[EncryptedSecret]) -> Result<Vec<Secret>> {
    let mut secrets = Vec::with_capacity(encrypted.len());

    for (index, record) in encrypted.iter().enumerate() {
        let name = cipher::decrypt_field(Field::SecretKey, &record.key_field(), key.as_bytes())
            .map_err(|e| at_index(index, e))?;
        let value = cipher::decrypt_field(Field::SecretValue, &record.value_field(), key.as_bytes())
            .map_err(|e| at_index(index, e))?;

        secrets.push(Secret::new(name, value, record.kind, record.id.as_str()));
    }

    debug!(count = secrets.len(), "decrypted secrets");
    Ok(secrets)
}

fn at_index(index: usize, err: Error) -> Error {
    match err {
        Error::Cipher(source) => Error::Secret { index, source },
        other => other,
    }
}

/// Fetch, expand and apply overrides: the final configuration.
///
/// # Errors
///
/// See [`fetch_secrets`].
pub fn resolve_secrets(
    params: &FetchParams,
    connector: &dyn Connector,
    sessions: &dyn SessionStore,
    options: ResolveOptions,
) -> Result<Vec<Secret>> {
    let secrets = fetch_secrets(params, connector, sessions)?;
    let secrets = if options.expand {
        expand::expand(&secrets)
    } else {
        secrets
    };
    let resolved = merge::override_secrets(&secrets, options.scope);

    info!(count = resolved.len(), "resolved secrets");
    Ok(resolved)
}
