//! Bullpen - resolve encrypted workspace secrets into plaintext configuration.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bullpen::cli::output;
use bullpen::cli::{execute, Cli};
use bullpen::core::constants::LOG_ENV;
use bullpen::error::{CipherError, ConfigError, Error, SessionError, TokenError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("bullpen=debug")
        } else {
            EnvFilter::new("bullpen=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match e.root() {
            Error::Session(SessionError::NotAuthenticated) => {
                Some("log in, or set BULLPEN_TOKEN to use a service token")
            }
            Error::Config(ConfigError::NotInitialized) => {
                Some("create .bullpen.toml with [workspace] id = \"...\"")
            }
            Error::Token(TokenError::Malformed) => {
                Some("a service token has four dot-separated parts")
            }
            Error::Cipher(CipherError::Authentication { .. })
            | Error::Secret {
                source: CipherError::Authentication { .. },
                ..
            } => {
                Some("the workspace key may have been rotated; request a new token")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
