//! Workspace key material.

use zeroize::Zeroizing;

/// Symmetric key protecting every secret of one workspace.
///
/// Derived fresh per invocation and wiped on drop.
pub struct WorkspaceKey(Zeroizing<Vec<u8>>);

impl WorkspaceKey {
    pub fn new(bytes: Zeroizing<Vec<u8>>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for WorkspaceKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl std::fmt::Debug for WorkspaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WorkspaceKey([REDACTED; {}])", self.0.len())
    }
}
