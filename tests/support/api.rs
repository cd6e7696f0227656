//! In-memory API connector and session store.

use std::cell::RefCell;
use std::rc::Rc;

use bullpen::core::api::{Connector, EncryptedWorkspaceKey, SecretsApi, TokenDetails};
use bullpen::core::domain::{EncryptedSecret, Session};
use bullpen::core::session::SessionStore;
use bullpen::error::{RemoteError, Result, SessionError};

/// What the fake server knows.
#[derive(Default)]
pub struct Server {
    pub token_details: Option<TokenDetails>,
    pub workspace_key: Option<EncryptedWorkspaceKey>,
    pub secrets: Vec<EncryptedSecret>,
    /// Every call, in order, e.g. `connect:<bearer>` or `secrets:<ws>/<env>`.
    pub calls: RefCell<Vec<String>>,
}

impl Server {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn unauthorized(endpoint: &str) -> bullpen::error::Error {
    RemoteError::Status {
        endpoint: endpoint.to_string(),
        status: 401,
        message: "unauthorized".to_string(),
    }
    .into()
}

/// Connector handing out clients backed by a shared [`Server`].
#[derive(Clone)]
pub struct FakeConnector {
    pub server: Rc<Server>,
}

impl FakeConnector {
    pub fn new(server: Server) -> Self {
        Self {
            server: Rc::new(server),
        }
    }
}

impl Connector for FakeConnector {
    fn connect(&self, bearer: &str) -> Result<Box<dyn SecretsApi>> {
        self.server.record(format!("connect:{}", bearer));
        Ok(Box::new(FakeApi {
            server: Rc::clone(&self.server),
        }))
    }
}

struct FakeApi {
    server: Rc<Server>,
}

impl SecretsApi for FakeApi {
    fn token_details(&self) -> Result<TokenDetails> {
        self.server.record("token_details".to_string());
        self.server
            .token_details
            .clone()
            .ok_or_else(|| unauthorized("/v2/service-token"))
    }

    fn encrypted_secrets(
        &self,
        workspace_id: &str,
        environment: &str,
    ) -> Result<Vec<EncryptedSecret>> {
        self.server
            .record(format!("secrets:{}/{}", workspace_id, environment));
        Ok(self.server.secrets.clone())
    }

    fn encrypted_workspace_key(&self, workspace_id: &str) -> Result<EncryptedWorkspaceKey> {
        self.server.record(format!("workspace_key:{}", workspace_id));
        self.server
            .workspace_key
            .clone()
            .ok_or_else(|| unauthorized("/v2/workspace/encrypted-key"))
    }
}

/// Session store returning a fixed session, or none.
pub struct FixedSession(pub Option<(String, String)>);

impl FixedSession {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(session: &Session) -> Self {
        Self(Some((
            session.jwt.clone(),
            session.private_key.as_str().to_string(),
        )))
    }
}

impl SessionStore for FixedSession {
    fn current(&self) -> Result<Session> {
        match &self.0 {
            Some((jwt, key)) => Ok(Session::new(jwt.as_str(), key.as_str())),
            None => Err(SessionError::NotAuthenticated.into()),
        }
    }
}
