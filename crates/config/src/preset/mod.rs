//! Reusable configuration presets.
//!
//! Responsibilities:
//! - Define the `Preset` hook trait run around a configuration scope.
//! - Compose presets (`ComposePreset`) and build presets from named hooks
//!   (`AutoPreset`).
//! - Provide the shared `Context` presets read from and write into.
//!
//! Does NOT handle:
//! - Deciding when hooks run (see `manager::scope`).
//!
//! Invariants:
//! - Presets share one mutable context; there is no isolation between them.
//! - `post` hooks may read keys set by `pre` hooks or by the configuration body.

mod auto;
mod compose;
mod context;

pub use auto::{AutoPreset, HookOutput, assign};
pub use compose::ComposePreset;
pub use context::Context;

use crate::manager::{ConfigError, EnvManager};

/// A configuration preset.
///
/// Both hooks do nothing by default.
pub trait Preset {
    /// Name used in logs and errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Runs before the configuration body.
    fn pre(&self, _env: &mut EnvManager, _context: &mut Context) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Runs after the configuration body. Use this to inspect and adjust
    /// what the body set.
    fn post(&self, _env: &mut EnvManager, _context: &mut Context) -> Result<(), ConfigError> {
        Ok(())
    }
}

impl<P: Preset + ?Sized> Preset for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pre(&self, env: &mut EnvManager, context: &mut Context) -> Result<(), ConfigError> {
        (**self).pre(env, context)
    }

    fn post(&self, env: &mut EnvManager, context: &mut Context) -> Result<(), ConfigError> {
        (**self).post(env, context)
    }
}
