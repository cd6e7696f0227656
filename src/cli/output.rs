//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: keys, hints
//! - Dimmed: secondary info
//!
//! Status lines go to stderr so stdout stays machine-readable.

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ not logged in: no session found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set BULLPEN_TOKEN or log in`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value row with the key padded to `width`.
pub fn row(key: &str, width: usize, value: impl Display) {
    let padded = format!("{:width$}", key, width = width);
    if colors_enabled() {
        println!("  {}  {}", style(padded).cyan(), value);
    } else {
        println!("  {}  {}", padded, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    let line = "─".repeat(RULE_WIDTH);
    if colors_enabled() {
        println!("{}", style(line).dim());
    } else {
        println!("{}", line);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print raw text to stdout without a trailing newline.
pub fn raw(text: &str) {
    print!("{}", text);
}
