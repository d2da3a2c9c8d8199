//! Get command implementation.

use anyhow::{Context as _, Result};
use env_manager::{ConfigError, Context, EnvManager, GetOptions, literal};

use super::print_json;

pub fn run(
    env: EnvManager,
    name: &str,
    default: Option<&str>,
    build_default: Option<&str>,
) -> Result<()> {
    let mut options = GetOptions::new();
    if let Some(default) = default {
        options = options.with_default(
            literal::parse(default).context("--default is not a valid YAML value")?,
        );
    }
    if let Some(build_default) = build_default {
        options = options.with_build_default(
            literal::parse(build_default).context("--build-default is not a valid YAML value")?,
        );
    }

    let value = env.scope(&mut Context::new(), |env, _| {
        Ok::<_, ConfigError>(env.get(name, options))
    })?;

    print_json(&value)
}
