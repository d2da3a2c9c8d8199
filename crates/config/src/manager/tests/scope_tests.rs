//! Scope lifecycle tests.
//!
//! Responsibilities:
//! - Test that missing and malformed variables are reported once, together.
//! - Test the `NO_ENV_CHECK` escape hatch.
//! - Test that a failing body's error takes precedence over the exit check.

use serial_test::serial;

use super::lock_env;
use crate::manager::{ConfigError, EnvManager, GetOptions};
use crate::preset::Context;

#[derive(Debug)]
enum BodyError {
    Config(ConfigError),
    Body(&'static str),
}

impl From<ConfigError> for BodyError {
    fn from(error: ConfigError) -> Self {
        BodyError::Config(error)
    }
}

fn manager() -> EnvManager {
    EnvManager::new().without_dotenv()
}

#[test]
#[serial]
fn test_all_missing_names_in_one_error() {
    let _lock = lock_env();

    temp_env::with_vars(
        [
            ("ENVM_TEST_A", None::<&str>),
            ("ENVM_TEST_B", None),
            ("ENVM_TEST_BROKEN", Some("{oops")),
            ("NO_ENV_CHECK", None),
        ],
        || {
            let result = manager().scope(&mut Context::new(), |env, _| {
                env.require("ENVM_TEST_B");
                env.require("ENVM_TEST_A");
                env.get("ENVM_TEST_BROKEN", GetOptions::new().yaml());
                Ok::<_, ConfigError>(())
            });

            match result {
                Err(ConfigError::ImproperlyConfigured {
                    missing,
                    syntax_error,
                }) => {
                    assert_eq!(missing, vec!["ENVM_TEST_A", "ENVM_TEST_B"]);
                    assert_eq!(syntax_error, vec!["ENVM_TEST_BROKEN"]);
                }
                other => panic!("expected ImproperlyConfigured, got {:?}", other),
            }
        },
    );
}

#[test]
#[serial]
fn test_error_message_names_every_variable() {
    let _lock = lock_env();

    temp_env::with_vars(
        [
            ("ENVM_TEST_A", None::<&str>),
            ("ENVM_TEST_BROKEN", Some("[1, 2")),
            ("NO_ENV_CHECK", None),
        ],
        || {
            let result = manager().scope(&mut Context::new(), |env, _| {
                env.require("ENVM_TEST_A");
                env.get("ENVM_TEST_BROKEN", GetOptions::new().yaml());
                Ok::<_, ConfigError>(())
            });

            let message = result.unwrap_err().to_string();
            assert_eq!(
                message,
                "Incorrect environment variables. Missing: ENVM_TEST_A. Syntax error: ENVM_TEST_BROKEN."
            );
        },
    );
}

#[test]
#[serial]
fn test_clean_scope_succeeds() {
    let _lock = lock_env();

    temp_env::with_vars(
        [("ENVM_TEST_A", Some("present")), ("NO_ENV_CHECK", None)],
        || {
            let value = manager()
                .scope(&mut Context::new(), |env, _| {
                    Ok::<_, ConfigError>(env.require("ENVM_TEST_A"))
                })
                .unwrap();

            assert_eq!(value, Some(serde_yaml::Value::String("present".to_string())));
        },
    );
}

#[test]
#[serial]
fn test_build_default_without_build_mode_still_fails() {
    let _lock = lock_env();

    temp_env::with_vars(
        [
            ("A_B_C_D_E_F_G_H", None::<&str>),
            ("BUILD_MODE", None),
            ("NO_ENV_CHECK", None),
        ],
        || {
            let result = manager().scope(&mut Context::new(), |env, _| {
                let value = env.get("A_B_C_D_E_F_G_H", GetOptions::new().with_build_default("foo"));
                assert!(value.is_none());
                Ok::<_, ConfigError>(())
            });

            assert!(matches!(result, Err(ConfigError::ImproperlyConfigured { .. })));
        },
    );
}

#[test]
#[serial]
fn test_no_env_check_suppresses_error() {
    let _lock = lock_env();

    temp_env::with_vars(
        [
            ("ENVM_TEST_A", None::<&str>),
            ("ENVM_TEST_BROKEN", Some("[1, 2")),
            ("NO_ENV_CHECK", Some("true")),
        ],
        || {
            let result = manager().scope(&mut Context::new(), |env, _| {
                env.require("ENVM_TEST_A");
                env.get("ENVM_TEST_BROKEN", GetOptions::new().yaml());
                Ok::<_, ConfigError>(())
            });

            assert!(result.is_ok());
        },
    );
}

#[test]
#[serial]
fn test_malformed_no_env_check_is_reported() {
    let _lock = lock_env();

    temp_env::with_vars(
        [("ENVM_TEST_A", None::<&str>), ("NO_ENV_CHECK", Some("[yes"))],
        || {
            let result = manager().scope(&mut Context::new(), |env, _| {
                env.require("ENVM_TEST_A");
                Ok::<_, ConfigError>(())
            });

            match result {
                Err(ConfigError::ImproperlyConfigured { syntax_error, .. }) => {
                    assert_eq!(syntax_error, vec!["NO_ENV_CHECK"]);
                }
                other => panic!("expected ImproperlyConfigured, got {:?}", other),
            }
        },
    );
}

#[test]
#[serial]
fn test_check_records_no_env_check_read() {
    let _lock = lock_env();

    temp_env::with_var_unset("NO_ENV_CHECK", || {
        let mut env = manager();
        env.check().unwrap();

        let info = env.read()["NO_ENV_CHECK"];
        assert!(info.is_yaml);
        assert!(!info.is_required);
    });
}

#[test]
#[serial]
fn test_body_error_takes_precedence() {
    let _lock = lock_env();

    temp_env::with_vars(
        [("ENVM_TEST_A", None::<&str>), ("NO_ENV_CHECK", None)],
        || {
            let result: Result<(), BodyError> = manager().scope(&mut Context::new(), |env, _| {
                env.require("ENVM_TEST_A");
                Err(BodyError::Body("settings failed"))
            });

            assert!(matches!(result, Err(BodyError::Body("settings failed"))));
        },
    );
}

#[test]
#[serial]
fn test_exit_check_converts_into_body_error_type() {
    let _lock = lock_env();

    temp_env::with_vars(
        [("ENVM_TEST_A", None::<&str>), ("NO_ENV_CHECK", None)],
        || {
            let result: Result<(), BodyError> = manager().scope(&mut Context::new(), |env, _| {
                env.require("ENVM_TEST_A");
                Ok(())
            });

            assert!(matches!(
                result,
                Err(BodyError::Config(ConfigError::ImproperlyConfigured { .. }))
            ));
        },
    );
}

#[test]
#[serial]
fn test_enter_and_finish() {
    let _lock = lock_env();

    temp_env::with_vars(
        [("ENVM_TEST_A", None::<&str>), ("NO_ENV_CHECK", None)],
        || {
            let mut env = manager().enter().unwrap();
            env.require("ENVM_TEST_A");
            assert!(env.finish().is_err());

            let env = manager().enter().unwrap();
            assert!(env.finish().is_ok());
        },
    );
}
