//! CLI command implementations.

pub mod check;
pub mod find_dotenv;
pub mod get;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to render value as JSON")?;
    println!("{}", output);
    Ok(())
}
