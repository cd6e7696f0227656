//! Bullpen - resolve encrypted workspace secrets into plaintext configuration.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secrets       # List and get resolved secrets
//! │   ├── export        # Print secrets as dotenv/json/shell
//! │   ├── run           # Run with injected secrets
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── api/          # Remote API trait + HTTP client
//!     ├── cipher/       # AES-GCM and NaCl box decryption
//!     ├── config        # .bullpen.toml management
//!     ├── domain/       # Secret, token, session, key types
//!     ├── expand        # ${NAME} reference expansion
//!     ├── fetch         # Auth path selection + batch decryption
//!     ├── format        # Export formats
//!     ├── merge         # Personal/shared override resolution
//!     └── session/      # Logged-in session storage
//! ```
//!
//! # Pipeline
//!
//! fetch (token or session) → decrypt → expand → override → output

pub mod cli;
pub mod core;
pub mod error;
