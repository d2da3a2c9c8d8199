//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Build an `EnvManager` from the global options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand};
use env_manager::constants::DEFAULT_BUILD_MODE_VAR;
use env_manager::{DotenvSource, EnvManager};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "envman")]
#[command(about = "Check and read environment configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envman check DATABASE_URL SECRET_KEY\n  envman --yaml get DEBUG --default false\n  envman --dotenv deploy/.env check API_TOKEN\n  envman find-dotenv --from src/\n"
)]
pub struct Cli {
    /// Path to the .env file to load (default: discover .env upwards from the current directory)
    #[arg(long, global = true, env = "ENVMAN_DOTENV", value_name = "FILE")]
    pub dotenv: Option<PathBuf>,

    /// Do not load any .env file
    #[arg(long, global = true, env = "ENVMAN_NO_DOTENV", conflicts_with = "dotenv")]
    pub no_dotenv: bool,

    /// Parse every value as YAML
    #[arg(long, global = true)]
    pub yaml: bool,

    /// Variable that turns build mode on
    #[arg(long, global = true, value_name = "NAME", default_value = DEFAULT_BUILD_MODE_VAR)]
    pub build_mode_var: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Require every listed variable and print their values as JSON
    Check {
        /// Variable names
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Print one variable as JSON
    Get {
        /// Variable name
        name: String,

        /// YAML value used when the variable is unset
        #[arg(long, value_name = "YAML")]
        default: Option<String>,

        /// YAML value used when the variable is unset in build mode
        #[arg(long, value_name = "YAML")]
        build_default: Option<String>,
    },

    /// Print the path of the .env file that would be loaded
    FindDotenv {
        /// Directory to start searching from (default: current directory)
        #[arg(long, value_name = "DIR")]
        from: Option<PathBuf>,
    },
}

impl Cli {
    /// Where `.env` values come from, per the global options.
    pub fn dotenv_source(&self) -> DotenvSource {
        if self.no_dotenv {
            DotenvSource::Disabled
        } else if let Some(path) = &self.dotenv {
            DotenvSource::Path(path.clone())
        } else {
            DotenvSource::Discover
        }
    }

    /// A manager configured from the global options.
    pub fn manager(&self) -> EnvManager {
        EnvManager::new()
            .with_dotenv(self.dotenv_source())
            .assume_yaml(self.yaml)
            .with_build_mode_var(self.build_mode_var.clone())
    }
}
