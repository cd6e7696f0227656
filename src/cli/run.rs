//! Run command.
//!
//! Executes a command with resolved secrets injected as environment variables.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::context::Context;
use crate::error::{Error, Result};

/// Run a command with secrets injected as environment variables.
pub fn execute(ctx: &Context, command: &[String], expand: bool) -> Result<()> {
    let exit_code = run_with_secrets(ctx, command, expand)?;
    std::process::exit(exit_code);
}

/// Run a command with resolved secrets as environment variables.
fn run_with_secrets(ctx: &Context, command: &[String], expand: bool) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let secrets = ctx.resolve(expand)?;
    debug!(count = secrets.len(), program = %program, "injecting secrets");

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    // Wipe each value from memory once handed to the child environment
    for secret in secrets {
        let value = Zeroizing::new(secret.value().to_string());
        cmd.env(secret.key(), value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
