//! Error types for environment configuration.
//!
//! Responsibilities:
//! - Define error variants for every failure the manager, dotenv loader and
//!   presets report.
//! - Render the aggregated "improperly configured" report.
//!
//! Does NOT handle:
//! - Deciding when to report (see `scope.rs`).
//!
//! Invariants:
//! - Missing and malformed variables are only ever reported together, once,
//!   through `ImproperlyConfigured`.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more variables were missing or could not be parsed.
    #[error("{}", improperly_configured_message(missing, syntax_error))]
    ImproperlyConfigured {
        missing: Vec<String>,
        syntax_error: Vec<String>,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse .env file {} at position {error_index}", path.display())]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file {}: {kind}", path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// A `.env` value cannot be stored in the process environment (it holds a NUL byte).
    ///
    /// SAFETY: Only the key is reported, never the value.
    #[error("Invalid value for {key} in .env file {}", path.display())]
    DotenvInvalidValue { path: PathBuf, key: String },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file {}", path.display())]
    DotenvUnknown { path: PathBuf },

    #[error("Context key '{0}' has not been set")]
    MissingContextKey(String),

    #[error("Invalid context value for {key}: {message}")]
    InvalidContextValue { key: String, message: String },

    #[error("Preset '{preset}' failed: {message}")]
    Preset { preset: String, message: String },
}

impl ConfigError {
    /// Wrap a dotenvy failure for `path` without leaking file contents.
    pub(crate) fn from_dotenv(path: PathBuf, error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, error_index) => {
                ConfigError::DotenvParse { path, error_index }
            }
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                path,
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown { path },
        }
    }
}

fn improperly_configured_message(missing: &[String], syntax_error: &[String]) -> String {
    let mut message = String::from("Incorrect environment variables.");

    if !missing.is_empty() {
        message.push_str(&format!(" Missing: {}.", missing.join(", ")));
    }
    if !syntax_error.is_empty() {
        message.push_str(&format!(" Syntax error: {}.", syntax_error.join(", ")));
    }

    message
}
