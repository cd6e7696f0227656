//! Service token type.
//!
//! A service token has four dot-separated segments. The first three form the
//! bearer credential sent to the API; the fourth is the symmetric secret that
//! unlocks the workspace key and never leaves this process.

use zeroize::Zeroizing;

use crate::core::constants::TOKEN_SEGMENTS;
use crate::error::{Result, TokenError};

/// A parsed service token
pub struct ServiceToken {
    bearer: String,
    secret: Zeroizing<String>,
}

impl ServiceToken {
    /// Parse a raw token string.
    ///
    /// Splits into at most four segments, so the secret segment may itself
    /// contain dots.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Malformed` if there are fewer than four segments.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.trim().splitn(TOKEN_SEGMENTS, '.').collect();
        if parts.len() < TOKEN_SEGMENTS {
            return Err(TokenError::Malformed.into());
        }

        Ok(Self {
            bearer: parts[..TOKEN_SEGMENTS - 1].join("."),
            secret: Zeroizing::new(parts[TOKEN_SEGMENTS - 1].to_string()),
        })
    }

    /// Credential for API calls (first three segments).
    pub fn bearer(&self) -> &str {
        &self.bearer
    }

    /// Local-only symmetric secret (fourth segment).
    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl std::fmt::Debug for ServiceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceToken")
            .field("bearer", &self.bearer)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
