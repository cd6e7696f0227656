//! Secret listing commands (secrets, get).

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::format;
use crate::error::Result;

/// List resolved secrets.
pub fn list(ctx: &Context, json: bool, expand: bool) -> Result<()> {
    let secrets = ctx.resolve(expand)?;

    if json {
        println!("{}", format::to_json(&secrets)?);
        return Ok(());
    }

    if secrets.is_empty() {
        output::dimmed("no secrets found");
        return Ok(());
    }

    let width = secrets.iter().map(|s| s.key().len()).max().unwrap_or(0);
    output::header(&format!("{} secrets ({})", secrets.len(), ctx.params.environment));
    output::rule();
    for secret in &secrets {
        output::row(secret.key(), width, format!("{}  [{}]", secret.value(), secret.kind()));
    }

    Ok(())
}

/// Print values of the requested keys, one per line.
///
/// Missing keys are reported on stderr and skipped.
pub fn get(ctx: &Context, keys: &[String], expand: bool) -> Result<()> {
    let secrets = ctx.resolve(expand)?;

    for key in keys {
        match secrets.iter().find(|s| s.key() == key) {
            Some(secret) => println!("{}", secret.value()),
            None => output::warn(&format!("secret not found: {}", key)),
        }
    }

    Ok(())
}
