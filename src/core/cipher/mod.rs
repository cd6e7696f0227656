//! Decryption gateway.
//!
//! Turns encrypted material fetched from the API into plaintext.
//!
//! ## Primitives
//!
//! - **symmetric**: AES-256-GCM with a detached tag. Used for every secret and
//!   for the workspace key on the service token path.
//! - **asymmetric**: NaCl box (X25519 + XSalsa20-Poly1305). Used for the
//!   workspace key on the logged-in user path.
//!
//! All wire fields are standard base64. Only decryption lives here.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::api::{EncryptedWorkspaceKey, TokenDetails};
use crate::core::domain::{EncryptedField, ServiceToken, Session, WorkspaceKey};
use crate::error::{CipherError, Field, Part, Result};

mod asymmetric;
mod symmetric;

pub use asymmetric::{open_box, BOX_KEY_SIZE, BOX_NONCE_SIZE};
pub use symmetric::{decrypt_symmetric, KEY_SIZE, TAG_SIZE};

/// Decode one base64 wire field.
///
/// # Errors
///
/// Returns `CipherError::Decode` naming the field and part on invalid input.
pub fn decode(encoded: &str, field: Field, part: Part) -> Result<Zeroizing<Vec<u8>>> {
    BASE64
        .decode(encoded.trim())
        .map(Zeroizing::new)
        .map_err(|e| {
            CipherError::Decode {
                field,
                part,
                reason: e.to_string(),
            }
            .into()
        })
}

/// Decrypt an encrypted field into a UTF-8 string.
///
/// # Errors
///
/// Returns `CipherError::Decode` if any part is not valid base64,
/// `CipherError::Authentication` if the tag does not verify, and
/// `CipherError::NotUtf8` if the plaintext is not a string.
pub fn decrypt_field(field: Field, encrypted: &EncryptedField, key: &[u8]) -> Result<String> {
    let ciphertext = decode(&encrypted.ciphertext, field, Part::Ciphertext)?;
    let tag = decode(&encrypted.tag, field, Part::Tag)?;
    let iv = decode(&encrypted.iv, field, Part::Iv)?;

    let plaintext = decrypt_symmetric(field, key, &ciphertext, &tag, &iv)?;

    String::from_utf8(plaintext.to_vec()).map_err(|_| CipherError::NotUtf8 { field }.into())
}

/// Unlock the workspace key with the secret segment of a service token.
///
/// The segment's bytes are used directly as the AES key.
pub fn workspace_key_from_token(token: &ServiceToken, details: &TokenDetails) -> Result<WorkspaceKey> {
    let field = Field::WorkspaceKey;
    let ciphertext = decode(&details.encrypted_key, field, Part::Ciphertext)?;
    let tag = decode(&details.tag, field, Part::Tag)?;
    let iv = decode(&details.iv, field, Part::Iv)?;

    trace!("decrypting workspace key with service token");
    let key = decrypt_symmetric(field, token.secret(), &ciphertext, &tag, &iv)?;
    Ok(WorkspaceKey::new(key))
}

/// Unlock the workspace key with the logged-in user's private key.
///
/// Successful decryption also proves the key was sealed by `sender`.
pub fn workspace_key_from_session(
    session: &Session,
    envelope: &EncryptedWorkspaceKey,
) -> Result<WorkspaceKey> {
    let field = Field::WorkspaceKey;
    let ciphertext = decode(&envelope.encrypted_key, field, Part::Ciphertext)?;
    let nonce = decode(&envelope.nonce, field, Part::Nonce)?;
    let sender = decode(&envelope.sender.public_key, field, Part::PublicKey)?;
    let private_key = decode(&session.private_key, field, Part::PrivateKey)?;

    trace!("opening workspace key with user private key");
    let key = open_box(&ciphertext, &nonce, &sender, &private_key)?;
    Ok(WorkspaceKey::new(key))
}
