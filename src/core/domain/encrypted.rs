//! Encrypted secret as returned by the API.

use serde::Deserialize;

use super::SecretType;
use crate::core::types::SecretId;

/// A base64-encoded `(ciphertext, tag, iv)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedField {
    pub ciphertext: String,
    pub tag: String,
    pub iv: String,
}

impl EncryptedField {
    pub fn new(
        ciphertext: impl Into<String>,
        tag: impl Into<String>,
        iv: impl Into<String>,
    ) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            tag: tag.into(),
            iv: iv.into(),
        }
    }
}

/// Server-side representation of a secret.
///
/// The key name and the value are encrypted separately with the workspace key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedSecret {
    #[serde(rename = "_id")]
    pub id: SecretId,
    #[serde(rename = "type")]
    pub kind: SecretType,
    pub secret_key_ciphertext: String,
    #[serde(rename = "secretKeyIV")]
    pub secret_key_iv: String,
    pub secret_key_tag: String,
    pub secret_value_ciphertext: String,
    #[serde(rename = "secretValueIV")]
    pub secret_value_iv: String,
    pub secret_value_tag: String,
}

impl EncryptedSecret {
    /// Encrypted key name.
    pub fn key_field(&self) -> EncryptedField {
        EncryptedField::new(
            self.secret_key_ciphertext.as_str(),
            self.secret_key_tag.as_str(),
            self.secret_key_iv.as_str(),
        )
    }

    /// Encrypted value.
    pub fn value_field(&self) -> EncryptedField {
        EncryptedField::new(
            self.secret_value_ciphertext.as_str(),
            self.secret_value_tag.as_str(),
            self.secret_value_iv.as_str(),
        )
    }
}
