//! Secret type.
//!
//! Represents a single decrypted secret with its key, value and scope.

use serde::{Deserialize, Serialize};

use crate::core::types::{SecretId, SecretKey, SecretValue};

/// Scope of a secret.
///
/// The same key may exist once per scope; personal values override shared
/// ones when resolving for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    Personal,
    Shared,
}

impl SecretType {
    /// Wire name of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretType::Personal => "personal",
            SecretType::Shared => "shared",
        }
    }
}

impl std::fmt::Display for SecretType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decrypted secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Secret {
    key: SecretKey,
    value: SecretValue,
    #[serde(rename = "type")]
    kind: SecretType,
    id: SecretId,
}

impl Secret {
    /// Create a new secret
    pub fn new(
        key: impl Into<SecretKey>,
        value: impl Into<SecretValue>,
        kind: SecretType,
        id: impl Into<SecretId>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind,
            id: id.into(),
        }
    }

    /// Secret's key name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Personal or shared
    pub fn kind(&self) -> SecretType {
        self.kind
    }

    /// Server-side identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Same secret carrying a different value.
    pub fn with_value(&self, value: impl Into<SecretValue>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
