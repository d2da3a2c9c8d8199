//! Presets assembled from named hooks.
//!
//! Responsibilities:
//! - Register `pre_*` and `post_*` hooks explicitly, in order.
//! - Merge the key/value pairs each hook returns into the context.
//!
//! Invariants:
//! - Hooks run in registration order within their phase.
//! - Every hook receives the manager and the full context; a hook ignores
//!   whatever it does not need.
//! - Later pairs overwrite earlier ones on key collisions.

use serde_yaml::Value;
use std::fmt;

use super::{Context, Preset};
use crate::manager::{ConfigError, EnvManager};

/// Pairs a hook asks to be written into the context.
pub type HookOutput = Result<Vec<(String, Value)>, ConfigError>;

type Hook = Box<dyn Fn(&mut EnvManager, &Context) -> HookOutput>;

struct NamedHook {
    name: String,
    hook: Hook,
}

/// Build a context assignment for a hook's output.
pub fn assign(key: impl Into<String>, value: impl Into<Value>) -> (String, Value) {
    (key.into(), value.into())
}

/// A preset whose hooks are registered by name.
///
/// ```
/// use env_manager::{AutoPreset, Context, EnvManager, Preset, assign};
///
/// let preset = AutoPreset::new("foo")
///     .with_pre("foo", |_, _| Ok(vec![assign("FOO", 42)]))
///     .with_pre("bar", |_, _| Ok(vec![assign("BAR", 24)]))
///     .with_post("foo_bar", |_, context| {
///         let sum = context.require_as::<i64>("FOO")? + context.require_as::<i64>("BAR")?;
///         Ok(vec![assign("FOO_BAR", sum)])
///     });
///
/// let mut env = EnvManager::new().without_dotenv();
/// let mut context = Context::new();
/// preset.pre(&mut env, &mut context)?;
/// preset.post(&mut env, &mut context)?;
/// assert_eq!(context.require_as::<i64>("FOO_BAR")?, 66);
/// # Ok::<(), env_manager::ConfigError>(())
/// ```
pub struct AutoPreset {
    name: String,
    pre: Vec<NamedHook>,
    post: Vec<NamedHook>,
}

impl fmt::Debug for AutoPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoPreset")
            .field("name", &self.name)
            .field("hooks", &self.hook_names())
            .finish()
    }
}

impl AutoPreset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pre: Vec::new(),
            post: Vec::new(),
        }
    }

    /// Register `pre_<suffix>`.
    pub fn with_pre<F>(mut self, suffix: &str, hook: F) -> Self
    where
        F: Fn(&mut EnvManager, &Context) -> HookOutput + 'static,
    {
        self.pre.push(NamedHook {
            name: format!("pre_{suffix}"),
            hook: Box::new(hook),
        });
        self
    }

    /// Register `post_<suffix>`.
    pub fn with_post<F>(mut self, suffix: &str, hook: F) -> Self
    where
        F: Fn(&mut EnvManager, &Context) -> HookOutput + 'static,
    {
        self.post.push(NamedHook {
            name: format!("post_{suffix}"),
            hook: Box::new(hook),
        });
        self
    }

    /// Registered hook names, `pre_*` first, each phase in run order.
    pub fn hook_names(&self) -> Vec<&str> {
        self.pre
            .iter()
            .chain(&self.post)
            .map(|named| named.name.as_str())
            .collect()
    }

    fn run(
        &self,
        hooks: &[NamedHook],
        env: &mut EnvManager,
        context: &mut Context,
    ) -> Result<(), ConfigError> {
        for named in hooks {
            let pairs = (named.hook)(env, context)?;
            tracing::debug!(
                preset = %self.name,
                hook = %named.name,
                assigned = pairs.len(),
                "Ran preset hook"
            );
            context.extend(pairs);
        }
        Ok(())
    }
}

impl Preset for AutoPreset {
    fn name(&self) -> &str {
        &self.name
    }

    fn pre(&self, env: &mut EnvManager, context: &mut Context) -> Result<(), ConfigError> {
        self.run(&self.pre, env, context)
    }

    fn post(&self, env: &mut EnvManager, context: &mut Context) -> Result<(), ConfigError> {
        self.run(&self.post, env, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_names_in_order() {
        let preset = AutoPreset::new("names")
            .with_post("late", |_, _| Ok(vec![]))
            .with_pre("b", |_, _| Ok(vec![]))
            .with_pre("a", |_, _| Ok(vec![]));

        assert_eq!(preset.hook_names(), vec!["pre_b", "pre_a", "post_late"]);
    }

    #[test]
    fn test_later_hook_overwrites() {
        let preset = AutoPreset::new("overwrite")
            .with_pre("first", |_, _| Ok(vec![assign("KEY", "one")]))
            .with_pre("second", |_, context| {
                assert_eq!(context.require_as::<String>("KEY")?, "one");
                Ok(vec![assign("KEY", "two")])
            });

        let mut env = EnvManager::new().without_dotenv();
        let mut context = Context::new();
        preset.pre(&mut env, &mut context).unwrap();

        assert_eq!(context.require_as::<String>("KEY").unwrap(), "two");
    }

    #[test]
    fn test_hook_may_yield_nothing() {
        let preset = AutoPreset::new("empty").with_post("noop", |_, _| Ok(vec![]));

        let mut env = EnvManager::new().without_dotenv();
        let mut context = Context::new();
        preset.post(&mut env, &mut context).unwrap();

        assert!(context.is_empty());
    }

    #[test]
    fn test_hook_error_propagates() {
        let preset = AutoPreset::new("needs_languages").with_post("language_code", |_, context| {
            let languages = context.require("LANGUAGES")?;
            Ok(vec![assign("LANGUAGE_CODE", languages[0][0].clone())])
        });

        let mut env = EnvManager::new().without_dotenv();
        let result = preset.post(&mut env, &mut Context::new());

        assert!(matches!(result, Err(ConfigError::MissingContextKey(_))));
    }
}
