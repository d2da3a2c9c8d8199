//! Scope lifecycle for `EnvManager`.
//!
//! Responsibilities:
//! - Load the `.env` file when a scope is entered.
//! - Run preset hooks around the caller's configuration code.
//! - Report every missing or malformed variable at once when the scope finishes.
//!
//! Does NOT handle:
//! - Resolving individual variables (see builder.rs).
//!
//! Invariants / Assumptions:
//! - `pre` hooks run in preset order before the body; `post` hooks run in
//!   preset order after a successful body.
//! - The exit check always runs. When the body (or a hook) already failed,
//!   that error is returned and a failing check is only logged.
//! - `NO_ENV_CHECK` is itself read through `get`, as YAML, defaulting to `false`.

use super::builder::EnvManager;
use super::error::ConfigError;
use super::options::GetOptions;
use crate::constants::NO_ENV_CHECK_VAR;
use crate::literal;
use crate::preset::Context;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Pre,
    Post,
}

impl EnvManager {
    /// Enter the scope: load the `.env` file unless loading is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly configured `.env` file cannot be read
    /// or has invalid syntax. A discovered file that does not exist is ignored.
    pub fn enter(self) -> Result<Self, ConfigError> {
        self.dotenv_source().load()?;
        Ok(self)
    }

    /// Leave the scope, failing if any variable was missing or malformed.
    pub fn finish(mut self) -> Result<(), ConfigError> {
        self.check()
    }

    /// Fail with an aggregated error if any variable was missing or malformed.
    ///
    /// Setting `NO_ENV_CHECK` to a truthy value skips the check.
    pub fn check(&mut self) -> Result<(), ConfigError> {
        let skip = self
            .get(NO_ENV_CHECK_VAR, GetOptions::new().with_default(false).yaml())
            .is_some_and(|value| literal::is_truthy(&value));

        if self.missing().is_empty() && self.syntax_errors().is_empty() {
            return Ok(());
        }

        let error = ConfigError::ImproperlyConfigured {
            missing: self.missing().iter().cloned().collect(),
            syntax_error: self.syntax_errors().iter().cloned().collect(),
        };

        if skip {
            tracing::warn!(error = %error, "{} is set, ignoring configuration errors", NO_ENV_CHECK_VAR);
            return Ok(());
        }

        Err(error)
    }

    /// Run every preset's `pre` hook against `context`.
    pub fn run_pre(&mut self, context: &mut Context) -> Result<(), ConfigError> {
        self.run_presets(Phase::Pre, context)
    }

    /// Run every preset's `post` hook against `context`.
    pub fn run_post(&mut self, context: &mut Context) -> Result<(), ConfigError> {
        self.run_presets(Phase::Post, context)
    }

    fn run_presets(&mut self, phase: Phase, context: &mut Context) -> Result<(), ConfigError> {
        // Presets receive `&mut self`, so they are taken out for the duration.
        let presets = std::mem::take(&mut self.presets);

        let mut result = Ok(());
        for preset in &presets {
            tracing::debug!(preset = preset.name(), phase = ?phase, "Running preset");
            result = match phase {
                Phase::Pre => preset.pre(self, context),
                Phase::Post => preset.post(self, context),
            };
            if result.is_err() {
                break;
            }
        }

        self.presets = presets;
        result
    }

    /// Run `body` inside a full scope.
    ///
    /// Enters the scope, runs `pre` hooks, the body, then `post` hooks, and
    /// finally checks for missing or malformed variables.
    pub fn scope<T, E, F>(self, context: &mut Context, body: F) -> Result<T, E>
    where
        F: FnOnce(&mut EnvManager, &mut Context) -> Result<T, E>,
        E: From<ConfigError>,
    {
        let mut env = self.enter()?;

        let outcome = match env.run_pre(context) {
            Ok(()) => match body(&mut env, context) {
                Ok(value) => env.run_post(context).map(|()| value).map_err(E::from),
                Err(err) => Err(err),
            },
            Err(err) => Err(E::from(err)),
        };

        match outcome {
            Ok(value) => {
                env.check()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(check_err) = env.check() {
                    tracing::warn!(
                        error = %check_err,
                        "Environment check failed while configuration was already failing"
                    );
                }
                Err(err)
            }
        }
    }
}
