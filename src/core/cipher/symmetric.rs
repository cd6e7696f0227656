//! AES-256-GCM with a detached authentication tag.
//!
//! The server produces 16-byte IVs, which is not the 12-byte GCM default, so
//! both nonce sizes are accepted.

use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{CipherError, Field, Part, Result};

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// GCM authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

type Aes256Gcm12 = AesGcm<Aes256, U12>;
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Decrypt `ciphertext` authenticated by `tag` under `key` and `iv`.
///
/// # Errors
///
/// Returns `CipherError::InvalidKeyLength` if `key` is not 32 bytes,
/// `CipherError::Decode` if `iv` has an unsupported length, and
/// `CipherError::Authentication` if the tag does not verify.
pub fn decrypt_symmetric(
    field: Field,
    key: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
    iv: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    if key.len() != KEY_SIZE {
        return Err(CipherError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        }
        .into());
    }

    trace!(
        %field,
        ciphertext_len = ciphertext.len(),
        iv_len = iv.len(),
        "decrypting"
    );

    // aes-gcm expects the tag appended to the ciphertext
    let mut payload = Zeroizing::new(Vec::with_capacity(ciphertext.len() + tag.len()));
    payload.extend_from_slice(ciphertext);
    payload.extend_from_slice(tag);

    let result = match iv.len() {
        12 => Aes256Gcm12::new_from_slice(key)
            .map_err(|_| invalid_key(key))?
            .decrypt(Nonce::<U12>::from_slice(iv), payload.as_slice()),
        16 => Aes256Gcm16::new_from_slice(key)
            .map_err(|_| invalid_key(key))?
            .decrypt(Nonce::<U16>::from_slice(iv), payload.as_slice()),
        other => {
            return Err(CipherError::Decode {
                field,
                part: Part::Iv,
                reason: format!("expected 12 or 16 bytes, got {}", other),
            }
            .into())
        }
    };

    let plaintext = result.map_err(|_| CipherError::Authentication { field })?;
    trace!(plaintext_len = plaintext.len(), "decrypted");

    Ok(Zeroizing::new(plaintext))
}

fn invalid_key(key: &[u8]) -> CipherError {
    CipherError::InvalidKeyLength {
        expected: KEY_SIZE,
        actual: key.len(),
    }
}
