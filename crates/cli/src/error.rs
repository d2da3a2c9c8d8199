//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use env_manager::ConfigError;

/// Structured exit codes for envman.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - variables missing or malformed.
    ///
    /// Scripts should set the listed variables and run again.
    Misconfigured = 2,

    /// The .env file could not be read or parsed.
    DotenvError = 3,

    /// Nothing was found (e.g. no .env file during discovery).
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ImproperlyConfigured { .. } => ExitCode::Misconfigured,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvInvalidValue { .. }
            | ConfigError::DotenvUnknown { .. } => ExitCode::DotenvError,
            ConfigError::MissingContextKey(_)
            | ConfigError::InvalidContextValue { .. }
            | ConfigError::Preset { .. } => ExitCode::GeneralError,
        }
    }
}

/// Marker error for commands that found nothing to report.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct NotFound(pub String);

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<NotFound>().is_some() {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}
