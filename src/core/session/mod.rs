//! Session storage.
//!
//! Provides access to the logged-in user's credentials with a
//! storage abstraction so other backends (OS keychain, env) can be added.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SessionStore` trait
//! 2. Add the implementation in a new file (e.g., `keychain.rs`)
//! 3. Re-export from this module

use crate::core::domain::Session;
use crate::error::Result;

mod fs;

pub use fs::Filesystem;

/// Session storage trait.
pub trait SessionStore {
    /// Load the current session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAuthenticated` if no session exists, or
    /// `SessionError::InvalidFormat` if the stored session is unreadable.
    fn current(&self) -> Result<Session>;
}
