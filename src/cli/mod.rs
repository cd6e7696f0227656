//! Command-line interface.

pub mod completions;
pub mod context;
pub mod export;
pub mod output;
pub mod run;
pub mod secrets;

use clap::{Parser, Subcommand};

use crate::core::format::Format;

/// Bullpen - resolve encrypted workspace secrets into plaintext configuration.
#[derive(Parser)]
#[command(
    name = "bullpen",
    about = "Resolve encrypted workspace secrets into plaintext configuration",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Service token (skips the logged-in session)
    #[arg(long, global = true, env = "BULLPEN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Environment to fetch (defaults to the workspace config, then "dev")
    #[arg(short, long = "env", global = true)]
    pub environment: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List resolved secrets
    Secrets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Keep ${NAME} references unexpanded
        #[arg(long)]
        no_expand: bool,
    },

    /// Print the resolved value of one or more secrets
    Get {
        /// Secret keys
        #[arg(required = true)]
        keys: Vec<String>,
        /// Keep ${NAME} references unexpanded
        #[arg(long)]
        no_expand: bool,
    },

    /// Print resolved secrets in an export format
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Dotenv)]
        format: ExportFormat,
        /// Keep ${NAME} references unexpanded
        #[arg(long)]
        no_expand: bool,
    },

    /// Run a command with secrets injected as env vars
    Run {
        /// Keep ${NAME} references unexpanded
        #[arg(long)]
        no_expand: bool,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Export formats accepted on the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    Dotenv,
    Json,
    Shell,
}

impl From<ExportFormat> for Format {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Dotenv => Format::Dotenv,
            ExportFormat::Json => Format::Json,
            ExportFormat::Shell => Format::Shell,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    use Command::*;

    let Cli {
        command,
        token,
        environment,
        ..
    } = cli;

    let ctx = || context::Context::new(token.clone(), environment.clone());

    match command {
        Secrets { json, no_expand } => secrets::list(&ctx()?, json, !no_expand),
        Get { keys, no_expand } => secrets::get(&ctx()?, &keys, !no_expand),
        Export { format, no_expand } => export::execute(&ctx()?, format.into(), !no_expand),
        Run { no_expand, command } => run::execute(&ctx()?, &command, !no_expand),
        Completions { shell } => completions::execute(shell),
    }
}
