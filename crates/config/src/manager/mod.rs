//! Scoped environment variable manager.
//!
//! Responsibilities:
//! - Load a `.env` file when a configuration scope starts.
//! - Resolve variables with defaults, build-mode defaults and YAML parsing.
//! - Collect missing and malformed variables and report them together when
//!   the scope ends.
//!
//! Does NOT handle:
//! - `.env` parsing details (see `crate::dotenv`).
//! - Preset behavior (see `crate::preset`).
//!
//! Invariants / Assumptions:
//! - Existing environment variables take precedence over `.env` values.
//! - Errors about individual variables are deferred until the scope ends.
//! - Build mode is evaluated on every `get`, never cached.

mod builder;
mod error;
mod options;
mod scope;

#[cfg(test)]
mod tests;

pub use builder::EnvManager;
pub use error::ConfigError;
pub use options::{Fallback, GetOptions, ReadInfo};
