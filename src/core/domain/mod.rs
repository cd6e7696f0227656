//! Domain types.

mod encrypted;
mod secret;
mod session;
mod token;
mod workspace_key;

pub use encrypted::{EncryptedField, EncryptedSecret};
pub use secret::{Secret, SecretType};
pub use session::Session;
pub use token::ServiceToken;
pub use workspace_key::WorkspaceKey;
