//! NaCl box (X25519 + XSalsa20-Poly1305) decryption.

use crypto_box::aead::generic_array::GenericArray;
use crypto_box::aead::Aead;
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{CipherError, Field, Part, Result};

/// X25519 key size in bytes.
pub const BOX_KEY_SIZE: usize = 32;

/// XSalsa20 nonce size in bytes.
pub const BOX_NONCE_SIZE: usize = 24;

/// Open a box sealed by `sender_public` for the holder of `private_key`.
///
/// # Errors
///
/// Returns `CipherError::Decode` if a key or the nonce has the wrong length,
/// and `CipherError::Authentication` if the box cannot be opened.
pub fn open_box(
    ciphertext: &[u8],
    nonce: &[u8],
    sender_public: &[u8],
    private_key: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let field = Field::WorkspaceKey;
    let sender: [u8; BOX_KEY_SIZE] = fixed(sender_public, Part::PublicKey)?;
    let secret: Zeroizing<[u8; BOX_KEY_SIZE]> = Zeroizing::new(fixed(private_key, Part::PrivateKey)?);
    if nonce.len() != BOX_NONCE_SIZE {
        return Err(wrong_length(Part::Nonce, BOX_NONCE_SIZE, nonce.len()).into());
    }

    trace!(ciphertext_len = ciphertext.len(), "opening box");

    let salsa = SalsaBox::new(&PublicKey::from(sender), &SecretKey::from(*secret));
    let plaintext = salsa
        .decrypt(GenericArray::from_slice(nonce), ciphertext)
        .map_err(|_| CipherError::Authentication { field })?;

    Ok(Zeroizing::new(plaintext))
}

fn fixed<const N: usize>(bytes: &[u8], part: Part) -> std::result::Result<[u8; N], CipherError> {
    bytes
        .try_into()
        .map_err(|_| wrong_length(part, N, bytes.len()))
}

fn wrong_length(part: Part, expected: usize, actual: usize) -> CipherError {
    CipherError::Decode {
        field: Field::WorkspaceKey,
        part,
        reason: format!("expected {} bytes, got {}", expected, actual),
    }
}
