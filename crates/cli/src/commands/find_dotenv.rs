//! Find-dotenv command implementation.

use anyhow::{Context, Result};
use env_manager::find_dotenv;
use std::path::PathBuf;

use crate::error::NotFound;

pub fn run(from: Option<PathBuf>) -> Result<()> {
    let start = match from {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match find_dotenv(&start) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(NotFound(format!("No .env file found at or above {}", start.display())).into()),
    }
}
