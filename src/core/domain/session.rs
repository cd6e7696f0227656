//! Logged-in user session.

use zeroize::Zeroizing;

/// Credentials of a logged-in user.
pub struct Session {
    /// Bearer token for API calls.
    pub jwt: String,
    /// Base64 X25519 private key used to open the workspace key.
    pub private_key: Zeroizing<String>,
}

impl Session {
    pub fn new(jwt: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            jwt: jwt.into(),
            private_key: Zeroizing::new(private_key.into()),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("jwt", &"[REDACTED]")
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
