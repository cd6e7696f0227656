//! Constants used throughout bullpen.
//!
//! Centralizes magic strings and configuration values.

/// Workspace configuration file name (.bullpen.toml).
pub const CONFIG_FILE: &str = ".bullpen.toml";

/// Environment variable holding a service token.
pub const TOKEN_ENV: &str = "BULLPEN_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "BULLPEN_API_URL";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BULLPEN_LOG";

/// API base URL used when neither the environment nor the config names one.
pub const DEFAULT_API_URL: &str = "https://app.bullpen.dev/api";

/// Environment slug used when neither the CLI nor the config names one.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Session directory relative to HOME (~/.bullpen).
pub const SESSION_DIR: &str = ".bullpen";

/// Session file name inside [`SESSION_DIR`].
pub const SESSION_FILE: &str = "session.json";

/// Number of dot-separated segments in a service token.
pub const TOKEN_SEGMENTS: usize = 4;

/// Timeout applied to every API request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
