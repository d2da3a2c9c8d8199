//! Check command implementation.

use anyhow::Result;
use env_manager::{ConfigError, Context, EnvManager};
use tracing::info;

use super::print_json;

pub fn run(env: EnvManager, names: &[String]) -> Result<()> {
    info!("Checking {} environment variable(s)", names.len());

    let mut context = Context::new();
    env.scope(&mut context, |env, context| {
        for name in names {
            if let Some(value) = env.require(name) {
                context.insert(name.as_str(), value);
            }
        }
        Ok::<_, ConfigError>(())
    })?;

    print_json(&context)
}
