//! envman - command-line front end for scoped environment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run an `EnvManager` scope over the requested variables.
//! - Print resolved values as JSON, or the aggregated configuration error.
//!
//! Does NOT handle:
//! - Variable resolution or `.env` parsing (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout only carries command output.
//! - Failures exit with a structured code (see `error` module).

mod args;
mod commands;
mod error;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    let env = cli.manager();

    match cli.command {
        Commands::Check { names } => commands::check::run(env, &names),
        Commands::Get {
            name,
            default,
            build_default,
        } => commands::get::run(env, &name, default.as_deref(), build_default.as_deref()),
        Commands::FindDotenv { from } => commands::find_dotenv::run(from),
    }
}
