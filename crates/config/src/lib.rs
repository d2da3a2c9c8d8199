//! Scoped environment configuration.
//!
//! This crate reads environment variables (optionally seeded from a `.env`
//! file), parses them as YAML literals, and reports every missing or
//! malformed variable in one error when a configuration scope ends.
//! Presets inject computed values into a shared [`Context`] before and after
//! the configuration code runs.

pub mod constants;
pub mod dotenv;
pub mod literal;
mod manager;
pub mod preset;

pub use dotenv::{DotenvReport, DotenvSource, find_dotenv, find_file_upwards};
pub use manager::{ConfigError, EnvManager, Fallback, GetOptions, ReadInfo};
pub use preset::{AutoPreset, ComposePreset, Context, HookOutput, Preset, assign};
pub use serde_yaml::Value;
