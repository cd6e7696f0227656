//! Error types.
//!
//! Every fallible operation returns [`Result`]. Errors are grouped by the
//! component that raises them and wrapped into the top-level [`Error`].

use std::fmt;

use thiserror::Error;

/// Which encrypted field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The workspace key itself.
    WorkspaceKey,
    /// The name of a secret.
    SecretKey,
    /// The value of a secret.
    SecretValue,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::WorkspaceKey => write!(f, "workspace key"),
            Field::SecretKey => write!(f, "secret key"),
            Field::SecretValue => write!(f, "secret value"),
        }
    }
}

/// Which part of an encrypted field failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Ciphertext,
    Tag,
    Iv,
    Nonce,
    PublicKey,
    PrivateKey,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Part::Ciphertext => "cipher text",
            Part::Tag => "authentication tag",
            Part::Iv => "IV",
            Part::Nonce => "nonce",
            Part::PublicKey => "public key",
            Part::PrivateKey => "private key",
        };
        f.write_str(name)
    }
}

/// Decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("unable to decode {part} for {field}: {reason}")]
    Decode {
        field: Field,
        part: Part,
        reason: String,
    },

    #[error("unable to decrypt {field}: authentication failed (wrong or rotated key?)")]
    Authentication { field: Field },

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("decrypted {field} is not valid UTF-8")]
    NotUtf8 { field: Field },
}

/// Service token errors.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("invalid service token: please double check your service token and try again")]
    Malformed,
}

/// Remote API errors.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("unable to build HTTP client: {0}")]
    Client(String),
}

/// Local session errors.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("not logged in: no session found")]
    NotAuthenticated,

    #[error("failed to read session file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("invalid session file: {0}")]
    InvalidFormat(String),
}

/// Workspace configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("workspace not initialized: no .bullpen.toml in this directory")]
    NotInitialized,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("unable to decrypt secret #{index}: {source}")]
    Secret {
        index: usize,
        #[source]
        source: CipherError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an error with a short description of what was being attempted.
    pub fn context(self, context: &'static str) -> Self {
        Error::Context {
            context,
            source: Box::new(self),
        }
    }

    /// The innermost error, with any context wrappers removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
