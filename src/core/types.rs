//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret key name (e.g., DATABASE_URL, API_KEY).
pub type SecretKey = String;

/// A plaintext secret value.
pub type SecretValue = String;

/// Opaque server-side identifier of a secret.
pub type SecretId = String;

/// Opaque workspace identifier.
pub type WorkspaceId = String;

/// Environment slug (e.g., dev, staging, prod).
pub type Environment = String;
