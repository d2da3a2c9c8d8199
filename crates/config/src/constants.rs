//! Centralized constants for the env-manager workspace.
//!
//! Reserved variable names and file names shared by the manager,
//! the dotenv loader and the CLI.

// =============================================================================
// Reserved Environment Variables
// =============================================================================

/// Default name of the variable that switches `get` to build defaults.
pub const DEFAULT_BUILD_MODE_VAR: &str = "BUILD_MODE";

/// When this variable parses to a truthy value, scope-exit validation is skipped.
pub const NO_ENV_CHECK_VAR: &str = "NO_ENV_CHECK";

// =============================================================================
// Dotenv
// =============================================================================

/// File name searched for during `.env` auto-discovery.
pub const DOTENV_FILE_NAME: &str = ".env";

// =============================================================================
// Literal Parsing
// =============================================================================

/// Words that YAML 1.1 reads as `true` when they make up a whole value.
pub const YAML11_TRUE_WORDS: &[&str] = &["yes", "Yes", "YES", "on", "On", "ON"];

/// Words that YAML 1.1 reads as `false` when they make up a whole value.
pub const YAML11_FALSE_WORDS: &[&str] = &["no", "No", "NO", "off", "Off", "OFF"];
