//! Export command - print resolved secrets to stdout.

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::format::{self, Format};
use crate::error::Result;

/// Print resolved secrets in `format`.
pub fn execute(ctx: &Context, format: Format, expand: bool) -> Result<()> {
    let secrets = ctx.resolve(expand)?;
    let rendered = format::render(&secrets, format)?;
    output::raw(&rendered);
    if format == Format::Json {
        println!();
    }
    Ok(())
}
