//! Test fixtures: keys, tokens and encryption helpers.
//!
//! Material is sealed with the same primitives the server uses so the
//! decryption path is exercised end to end.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use crypto_box::aead::generic_array::GenericArray;
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use rand::RngCore;

use bullpen::core::api::{EncryptedWorkspaceKey, KeySender, TokenDetails};
use bullpen::core::domain::{EncryptedField, EncryptedSecret, SecretType, Session};

type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Workspace key protecting every fixture secret.
pub const WORKSPACE_KEY: &[u8; 32] = b"9f86d081884c7d659a2feaa0c55ad015";

/// Secret (fourth) segment of the fixture service token.
pub const TOKEN_SECRET: &str = "a3f1c9e27b4d8065f2e1d0c9b8a79685";

/// Bearer (first three segments) of the fixture service token.
pub const TOKEN_BEARER: &str = "st.6400f8a1.5c2d";

pub const WORKSPACE_ID: &str = "ws-6400f8a1";
pub const ENVIRONMENT: &str = "dev";
pub const JWT: &str = "eyJhbGciOiJIUzI1NiJ9.user.sig";

/// Full fixture service token.
pub fn service_token() -> String {
    format!("{}.{}", TOKEN_BEARER, TOKEN_SECRET)
}

/// Encrypt `plaintext` with AES-256-GCM and a random 16-byte IV.
pub fn seal(key: &[u8], plaintext: &[u8]) -> EncryptedField {
    let mut iv = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut iv);

    let mut sealed = Aes256Gcm16::new_from_slice(key)
        .expect("fixture key is 32 bytes")
        .encrypt(Nonce::<U16>::from_slice(&iv), plaintext)
        .expect("encryption failed");
    let tag = sealed.split_off(sealed.len() - 16);

    EncryptedField::new(BASE64.encode(sealed), BASE64.encode(tag), BASE64.encode(iv))
}

/// Encrypt one secret the way the server stores it.
pub fn encrypted_secret(key: &[u8], name: &str, value: &str, kind: SecretType) -> EncryptedSecret {
    let k = seal(key, name.as_bytes());
    let v = seal(key, value.as_bytes());

    EncryptedSecret {
        id: format!("id-{}-{}", name, kind),
        kind,
        secret_key_ciphertext: k.ciphertext,
        secret_key_iv: k.iv,
        secret_key_tag: k.tag,
        secret_value_ciphertext: v.ciphertext,
        secret_value_iv: v.iv,
        secret_value_tag: v.tag,
    }
}

/// Encrypt a list of `(name, value, kind)` triples with [`WORKSPACE_KEY`].
pub fn encrypted_batch(entries: &[(&str, &str, SecretType)]) -> Vec<EncryptedSecret> {
    entries
        .iter()
        .map(|(name, value, kind)| encrypted_secret(WORKSPACE_KEY, name, value, *kind))
        .collect()
}

/// Token details whose encrypted key unlocks to [`WORKSPACE_KEY`].
pub fn token_details() -> TokenDetails {
    let sealed = seal(TOKEN_SECRET.as_bytes(), WORKSPACE_KEY);

    TokenDetails {
        workspace: WORKSPACE_ID.to_string(),
        environment: ENVIRONMENT.to_string(),
        encrypted_key: sealed.ciphertext,
        iv: sealed.iv,
        tag: sealed.tag,
    }
}

/// A user keypair plus a workspace key sealed for that user.
pub struct UserKeys {
    pub session: Session,
    pub envelope: EncryptedWorkspaceKey,
}

/// Seal [`WORKSPACE_KEY`] from a fresh sender to a fresh user.
pub fn user_keys() -> UserKeys {
    let mut rng = rand::thread_rng();
    let mut user_bytes = [0u8; 32];
    let mut sender_bytes = [0u8; 32];
    let mut nonce = [0u8; 24];
    rng.fill_bytes(&mut user_bytes);
    rng.fill_bytes(&mut sender_bytes);
    rng.fill_bytes(&mut nonce);

    let user = SecretKey::from(user_bytes);
    let sender = SecretKey::from(sender_bytes);
    let sender_public: PublicKey = sender.public_key();

    let sealed = SalsaBox::new(&user.public_key(), &sender)
        .encrypt(GenericArray::from_slice(&nonce), WORKSPACE_KEY.as_slice())
        .expect("box encryption failed");

    UserKeys {
        session: Session::new(JWT, BASE64.encode(user.to_bytes())),
        envelope: EncryptedWorkspaceKey {
            encrypted_key: BASE64.encode(sealed),
            nonce: BASE64.encode(nonce),
            sender: KeySender {
                public_key: BASE64.encode(sender_public.as_bytes()),
            },
        },
    }
}

/// Flip one bit inside a base64 field.
pub fn corrupt(encoded: &str) -> String {
    let mut bytes = BASE64.decode(encoded).expect("fixture field is base64");
    bytes[0] ^= 0x01;
    BASE64.encode(bytes)
}
