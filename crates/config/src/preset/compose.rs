//! Composition of several presets into one.

use super::{Context, Preset};
use crate::manager::{ConfigError, EnvManager};

/// Runs several presets as one, in the order they were given.
///
/// A preset sees every context change made by the presets before it in the
/// same phase.
#[derive(Default)]
pub struct ComposePreset {
    presets: Vec<Box<dyn Preset>>,
}

impl ComposePreset {
    pub fn new(presets: Vec<Box<dyn Preset>>) -> Self {
        Self { presets }
    }

    /// Append a preset.
    pub fn with(mut self, preset: impl Preset + 'static) -> Self {
        self.presets.push(Box::new(preset));
        self
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Preset for ComposePreset {
    fn name(&self) -> &str {
        "ComposePreset"
    }

    fn pre(&self, env: &mut EnvManager, context: &mut Context) -> Result<(), ConfigError> {
        for preset in &self.presets {
            preset.pre(env, context)?;
        }
        Ok(())
    }

    fn post(&self, env: &mut EnvManager, context: &mut Context) -> Result<(), ConfigError> {
        for preset in &self.presets {
            preset.post(env, context)?;
        }
        Ok(())
    }
}
