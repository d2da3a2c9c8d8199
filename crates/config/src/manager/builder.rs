//! `EnvManager` construction and variable resolution.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvManager` (dotenv source, YAML default,
//!   build mode variable, presets).
//! - Resolve individual variables with defaults, build defaults and YAML parsing.
//! - Record every request, and every missing or malformed variable.
//!
//! Does NOT handle:
//! - Scope entry/exit and reporting (see scope.rs).
//! - `.env` parsing (see `crate::dotenv`).
//!
//! Invariants / Assumptions:
//! - Names are never removed from `missing` or `syntax_error`.
//! - `read` holds the last request for each name.
//! - Defaults are returned as given, never parsed.
//! - A malformed value never fails the `get` call itself.

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::env::VarError;
use std::fmt;

use super::options::{Fallback, GetOptions, ReadInfo};
use crate::constants::DEFAULT_BUILD_MODE_VAR;
use crate::dotenv::DotenvSource;
use crate::literal;
use crate::preset::Preset;

/// Reads environment variables for one configuration scope.
///
/// ```no_run
/// use env_manager::{ConfigError, Context, EnvManager, GetOptions};
///
/// let mut context = Context::new();
/// let port = EnvManager::new().scope(&mut context, |env, _| {
///     Ok::<_, ConfigError>(env.get_as::<u16>("PORT", GetOptions::new().with_default(8000)))
/// })?;
/// # Ok::<(), ConfigError>(())
/// ```
pub struct EnvManager {
    dotenv: DotenvSource,
    assume_yaml: bool,
    build_mode_var: String,
    pub(super) presets: Vec<Box<dyn Preset>>,
    missing: BTreeSet<String>,
    syntax_error: BTreeSet<String>,
    read: BTreeMap<String, ReadInfo>,
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvManager")
            .field("dotenv", &self.dotenv)
            .field("assume_yaml", &self.assume_yaml)
            .field("build_mode_var", &self.build_mode_var)
            .field("presets", &self.presets.len())
            .field("missing", &self.missing)
            .field("syntax_error", &self.syntax_error)
            .field("read", &self.read)
            .finish()
    }
}

impl EnvManager {
    /// Create a manager that discovers `.env` from the current directory.
    pub fn new() -> Self {
        Self {
            dotenv: DotenvSource::default(),
            assume_yaml: false,
            build_mode_var: DEFAULT_BUILD_MODE_VAR.to_string(),
            presets: Vec::new(),
            missing: BTreeSet::new(),
            syntax_error: BTreeSet::new(),
            read: BTreeMap::new(),
        }
    }

    /// Set where the `.env` file comes from.
    pub fn with_dotenv(mut self, source: DotenvSource) -> Self {
        self.dotenv = source;
        self
    }

    /// Do not load any `.env` file.
    pub fn without_dotenv(self) -> Self {
        self.with_dotenv(DotenvSource::Disabled)
    }

    /// Parse every variable as YAML unless a request says otherwise.
    pub fn assume_yaml(mut self, assume_yaml: bool) -> Self {
        self.assume_yaml = assume_yaml;
        self
    }

    /// Set the variable that turns build mode on.
    pub fn with_build_mode_var(mut self, name: impl Into<String>) -> Self {
        self.build_mode_var = name.into();
        self
    }

    /// Add a preset; presets run in the order they were added.
    pub fn with_preset(mut self, preset: impl Preset + 'static) -> Self {
        self.presets.push(Box::new(preset));
        self
    }

    pub fn dotenv_source(&self) -> &DotenvSource {
        &self.dotenv
    }

    pub fn assumes_yaml(&self) -> bool {
        self.assume_yaml
    }

    pub fn build_mode_var(&self) -> &str {
        &self.build_mode_var
    }

    /// Names requested without a default and absent from the environment.
    pub fn missing(&self) -> &BTreeSet<String> {
        &self.missing
    }

    /// Names whose value could not be parsed.
    pub fn syntax_errors(&self) -> &BTreeSet<String> {
        &self.syntax_error
    }

    /// Every variable requested so far.
    pub fn read(&self) -> &BTreeMap<String, ReadInfo> {
        &self.read
    }

    /// Whether build mode is on.
    ///
    /// Returns `None` when the build mode variable is unset or not valid YAML.
    pub fn in_build_mode(&self) -> Option<bool> {
        std::env::var(&self.build_mode_var)
            .ok()
            .and_then(|raw| literal::parse_flag(&raw))
    }

    /// Get a variable.
    ///
    /// Returns `None` when a required variable is absent or a YAML value is
    /// malformed; both are remembered and reported when the scope finishes.
    pub fn get(&mut self, name: &str, options: GetOptions) -> Option<Value> {
        let is_yaml = options.is_yaml.unwrap_or(self.assume_yaml);
        let use_build_default =
            self.in_build_mode().unwrap_or(false) && !options.build_default.is_required();
        let fallback = if use_build_default {
            options.build_default
        } else {
            options.default
        };

        self.read.insert(
            name.to_string(),
            ReadInfo {
                is_yaml,
                is_required: fallback.is_required(),
            },
        );

        let raw = match std::env::var(name) {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => {
                return match fallback {
                    Fallback::Required => {
                        tracing::debug!(var = name, "Required environment variable is missing");
                        self.missing.insert(name.to_string());
                        None
                    }
                    Fallback::Default(value) => Some(value),
                };
            }
            Err(VarError::NotUnicode(_)) => {
                tracing::debug!(var = name, "Environment variable is not valid UTF-8");
                self.syntax_error.insert(name.to_string());
                return None;
            }
        };

        if !is_yaml {
            return Some(Value::String(raw));
        }

        match literal::parse(&raw) {
            Ok(value) => Some(value),
            Err(_) => {
                // The parser error may quote the value, so only the name is logged.
                tracing::debug!(var = name, "Environment variable is not valid YAML");
                self.syntax_error.insert(name.to_string());
                None
            }
        }
    }

    /// Get a required variable with the manager's default parsing.
    pub fn require(&mut self, name: &str) -> Option<Value> {
        self.get(name, GetOptions::new())
    }

    /// Get a variable and deserialize it into `T`.
    ///
    /// The value is parsed as YAML unless `options` asks for the raw string.
    /// A value that does not fit `T` is recorded as a syntax error.
    pub fn get_as<T: DeserializeOwned>(&mut self, name: &str, options: GetOptions) -> Option<T> {
        let options = GetOptions {
            is_yaml: Some(options.is_yaml.unwrap_or(true)),
            ..options
        };
        let value = self.get(name, options)?;

        match serde_yaml::from_value(value) {
            Ok(typed) => Some(typed),
            Err(_) => {
                tracing::debug!(
                    var = name,
                    expected = std::any::type_name::<T>(),
                    "Environment variable has the wrong type"
                );
                self.syntax_error.insert(name.to_string());
                None
            }
        }
    }
}
