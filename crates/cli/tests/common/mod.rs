//! Shared test utilities for envman integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Control variables that change resolution are cleared from the host.

use assert_cmd::Command;

/// Returns a hermetic `envman` command for integration testing.
///
/// It ensures:
/// - `ENVMAN_NO_DOTENV=1` is set to prevent local `.env` contamination.
/// - `BUILD_MODE`, `NO_ENV_CHECK` and `ENVMAN_DOTENV` are cleared.
pub fn envman_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envman");

    // Hermeticity: prevent loading local .env
    cmd.env("ENVMAN_NO_DOTENV", "1");

    // Clear potential host leakage
    cmd.env_remove("BUILD_MODE")
        .env_remove("NO_ENV_CHECK")
        .env_remove("ENVMAN_DOTENV");

    cmd
}

/// Returns an `envman` command that may load `.env` files.
#[allow(dead_code)]
pub fn envman_cmd_with_dotenv() -> Command {
    let mut cmd = envman_cmd();
    cmd.env_remove("ENVMAN_NO_DOTENV");
    cmd
}
