//! Remote API collaborator.
//!
//! The fetch orchestrator only talks to the [`SecretsApi`] trait. A
//! [`Connector`] turns a bearer credential into an authenticated client, so
//! the service token path and the user path can share one interface.
//!
//! ## Adding a New Transport
//!
//! 1. Implement `SecretsApi` for the client type
//! 2. Implement `Connector` to build it from a bearer credential
//! 3. Re-export from this module

use serde::Deserialize;

use crate::core::domain::EncryptedSecret;
use crate::error::Result;

mod http;

pub use http::{HttpApi, HttpConnector};

/// Metadata attached to a service token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    /// Workspace the token grants access to.
    pub workspace: String,
    /// Environment slug the token is scoped to.
    pub environment: String,
    /// Workspace key encrypted with the token's secret segment.
    pub encrypted_key: String,
    pub iv: String,
    pub tag: String,
}

/// Public key of the member who sealed a workspace key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySender {
    pub public_key: String,
}

/// Workspace key sealed for the logged-in user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedWorkspaceKey {
    pub encrypted_key: String,
    pub nonce: String,
    pub sender: KeySender,
}

/// Envelope of the secrets listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SecretsResponse {
    pub secrets: Vec<EncryptedSecret>,
}

/// Authenticated access to the secrets service.
pub trait SecretsApi {
    /// Metadata for the service token the client was built with.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success response.
    fn token_details(&self) -> Result<TokenDetails>;

    /// Encrypted secrets of one workspace environment.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success response.
    fn encrypted_secrets(&self, workspace_id: &str, environment: &str)
        -> Result<Vec<EncryptedSecret>>;

    /// Workspace key sealed for the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success response.
    fn encrypted_workspace_key(&self, workspace_id: &str) -> Result<EncryptedWorkspaceKey>;
}

/// Builds authenticated API clients.
pub trait Connector {
    /// Build a client that authenticates every call with `bearer`.
    fn connect(&self, bearer: &str) -> Result<Box<dyn SecretsApi>>;
}
