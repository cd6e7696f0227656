//! Rendering resolved secrets for export.

use serde::Serialize;

use crate::core::domain::Secret;
use crate::error::{Error, Result};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `KEY=value` lines, quoted when needed.
    #[default]
    Dotenv,
    /// A JSON array of `{ key, value, type, id }` objects.
    Json,
    /// `export KEY='value'` lines for `eval`.
    Shell,
}

/// Render `secrets` in `format`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(secrets: &[Secret], format: Format) -> Result<String> {
    match format {
        Format::Dotenv => Ok(to_dotenv(secrets)),
        Format::Json => to_json(secrets),
        Format::Shell => Ok(to_shell(secrets)),
    }
}

/// `.env` representation.
///
/// Quotes values that contain spaces or special characters.
pub fn to_dotenv(secrets: &[Secret]) -> String {
    let mut output = String::new();

    for secret in secrets {
        let value = secret.value();
        if needs_quotes(value) {
            output.push_str(&format!("{}=\"{}\"\n", secret.key(), escape_env_value(value)));
        } else {
            output.push_str(&format!("{}={}\n", secret.key(), value));
        }
    }

    output
}

/// Pretty JSON array.
///
/// # Errors
///
/// Returns `Error::Other` if serialization fails.
pub fn to_json(secrets: &[Secret]) -> Result<String> {
    #[derive(Serialize)]
    struct Entry<'a> {
        key: &'a str,
        value: &'a str,
        #[serde(rename = "type")]
        kind: &'a str,
        id: &'a str,
    }

    let entries: Vec<Entry<'_>> = secrets
        .iter()
        .map(|s| Entry {
            key: s.key(),
            value: s.value(),
            kind: s.kind().as_str(),
            id: s.id(),
        })
        .collect();

    serde_json::to_string_pretty(&entries)
        .map_err(|e| Error::Other(format!("failed to serialize secrets: {}", e)))
}

/// POSIX shell `export` statements.
pub fn to_shell(secrets: &[Secret]) -> String {
    secrets
        .iter()
        .map(|s| format!("export {}='{}'\n", s.key(), s.value().replace('\'', "'\\''")))
        .collect()
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains('#')
        || value.contains('=')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
