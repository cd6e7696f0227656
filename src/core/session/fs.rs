//! Filesystem-based session storage.
//!
//! Reads the session written by `login` from `~/.bullpen/session.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::SessionStore;
use crate::core::constants::{SESSION_DIR, SESSION_FILE};
use crate::core::domain::Session;
use crate::error::{Result, SessionError};

/// On-disk session layout.
#[derive(Deserialize)]
struct SessionFile {
    jwt: String,
    private_key: String,
}

/// Filesystem-based session storage.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    /// Store reading from an explicit session file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store reading from `~/.bullpen/session.json`.
    ///
    /// Falls back to a path relative to the working directory when HOME
    /// cannot be determined.
    pub fn default_location() -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        Self::new(home.join(SESSION_DIR).join(SESSION_FILE))
    }
}

/// Warn when the session file is readable by others (Unix only).
#[cfg(unix)]
fn check_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "session file is accessible by other users; run chmod 600"
            );
        }
    }
}

impl SessionStore for Filesystem {
    fn current(&self) -> Result<Session> {
        debug!(path = %self.path.display(), "loading session");

        if !self.path.exists() {
            return Err(SessionError::NotAuthenticated.into());
        }

        #[cfg(unix)]
        check_permissions(&self.path);

        let contents = fs::read_to_string(&self.path).map_err(SessionError::ReadFailed)?;
        let file: SessionFile = serde_json::from_str(&contents)
            .map_err(|e| SessionError::InvalidFormat(e.to_string()))?;

        if file.jwt.trim().is_empty() {
            return Err(SessionError::NotAuthenticated.into());
        }

        Ok(Session::new(file.jwt, file.private_key))
    }
}
