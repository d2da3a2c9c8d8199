//! Per-variable request options.
//!
//! Responsibilities:
//! - Describe how a single `get` call resolves a variable: defaults, build
//!   defaults and whether to parse the value as YAML.
//! - Describe what the manager remembers about each request (`ReadInfo`).

use serde::Serialize;
use serde_yaml::Value;

/// What to return when a variable is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fallback {
    /// No default: the variable must be set.
    #[default]
    Required,
    /// Return this value, unparsed.
    Default(Value),
}

impl Fallback {
    pub fn is_required(&self) -> bool {
        matches!(self, Fallback::Required)
    }
}

/// Options for `EnvManager::get`.
///
/// ```
/// use env_manager::GetOptions;
///
/// let options = GetOptions::new().with_default(8000).with_build_default(0).yaml();
/// assert_eq!(options.is_yaml, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOptions {
    pub default: Fallback,
    /// Used instead of `default` while build mode is on.
    pub build_default: Fallback,
    /// `None` defers to the manager's `assume_yaml` setting.
    pub is_yaml: Option<bool>,
}

impl GetOptions {
    /// A required variable, parsed according to the manager's settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value returned when the variable is absent.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Fallback::Default(value.into());
        self
    }

    /// Set the value returned when the variable is absent in build mode.
    pub fn with_build_default(mut self, value: impl Into<Value>) -> Self {
        self.build_default = Fallback::Default(value.into());
        self
    }

    /// Parse the value as YAML.
    pub fn yaml(mut self) -> Self {
        self.is_yaml = Some(true);
        self
    }

    /// Return the raw string even if the manager assumes YAML.
    pub fn raw(mut self) -> Self {
        self.is_yaml = Some(false);
        self
    }
}

/// What the manager recorded about the last request for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadInfo {
    pub is_yaml: bool,
    pub is_required: bool,
}
