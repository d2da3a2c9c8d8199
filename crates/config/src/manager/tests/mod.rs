//! Tests for the environment manager.
//!
//! Responsibilities:
//! - Test variable resolution, defaults and YAML parsing.
//! - Test build mode default selection.
//! - Test scope lifecycle, aggregated reporting and error precedence.
//! - Test `.env` loading through the manager.
//! - Test presets running inside a scope.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Variables set by a test are restored through `temp_env`.

use std::sync::{Mutex, MutexGuard};

pub mod scope_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Lock the environment, ignoring poisoning left by an earlier failed test.
pub fn lock_env() -> MutexGuard<'static, ()> {
    env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
