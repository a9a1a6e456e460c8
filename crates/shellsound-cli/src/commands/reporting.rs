//! Shared console output helpers.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

/// Prints a cyan banner.
pub(crate) fn print_banner(title: &str) {
    let rule = "=".repeat(38);
    println!("{}", rule.cyan());
    println!("  {}", title.cyan());
    println!("{}", rule.cyan());
    println!();
}

/// Prints a bold blue `label value` line.
pub(crate) fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", label.blue().bold(), value);
}

/// Pretty-prints `value` as JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
