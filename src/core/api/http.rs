//! HTTP implementation of the API collaborator.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{Connector, EncryptedWorkspaceKey, SecretsApi, SecretsResponse, TokenDetails};
use crate::core::constants::REQUEST_TIMEOUT_SECS;
use crate::core::domain::EncryptedSecret;
use crate::error::{RemoteError, Result};

/// Longest slice of an error body echoed back to the user.
const MAX_ERROR_BODY: usize = 200;

/// Builds [`HttpApi`] clients against one base URL.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    base_url: String,
}

impl HttpConnector {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Connector for HttpConnector {
    fn connect(&self, bearer: &str) -> Result<Box<dyn SecretsApi>> {
        Ok(Box::new(HttpApi::new(&self.base_url, bearer)?))
    }
}

/// Blocking HTTP client for the secrets service.
pub struct HttpApi {
    client: Client,
    base_url: Url,
    bearer: String,
}

impl HttpApi {
    /// Create a client authenticating with `bearer`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Client` if `base_url` is not an absolute URL or
    /// the HTTP client cannot be built.
    pub fn new(base_url: &str, bearer: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| RemoteError::Client(format!("invalid API URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Client(format!("invalid API URL: {}", base_url)).into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| RemoteError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            bearer: bearer.to_string(),
        })
    }

    /// Base URL with `segments` appended, each percent-encoded as one segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(segments);
        let path = url.path().to_string();
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.bearer)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .map_err(|source| RemoteError::Transport {
                endpoint: path.clone(),
                source,
            })?;

        parse_response(&path, response)
    }
}

fn parse_response<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(RemoteError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: sanitize_body(&body, MAX_ERROR_BODY),
        }
        .into());
    }

    response.json::<T>().map_err(|e| {
        RemoteError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Collapse whitespace and cut an error body to `max` characters.
fn sanitize_body(body: &str, max: usize) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max).collect();
    format!("{}...", cut)
}

impl SecretsApi for HttpApi {
    #[instrument(skip(self))]
    fn token_details(&self) -> Result<TokenDetails> {
        self.get(&["v2", "service-token"], &[])
    }

    #[instrument(skip(self))]
    fn encrypted_secrets(
        &self,
        workspace_id: &str,
        environment: &str,
    ) -> Result<Vec<EncryptedSecret>> {
        let response: SecretsResponse = self.get(
            &["v2", "secrets"],
            &[("workspaceId", workspace_id), ("environment", environment)],
        )?;
        debug!(count = response.secrets.len(), "fetched encrypted secrets");
        Ok(response.secrets)
    }

    #[instrument(skip(self))]
    fn encrypted_workspace_key(&self, workspace_id: &str) -> Result<EncryptedWorkspaceKey> {
        self.get(&["v2", "workspace", workspace_id, "encrypted-key"], &[])
    }
}
