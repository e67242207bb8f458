use std::env;

use required_env::{EnvironmentVariableError, global};
use serial_test::serial;

fn reset() {
    global().missing().clear();
}

#[test]
#[serial]
fn test_basic_functionality() {
    reset();
    unsafe {
        env::set_var("TEST_VAR", "test_value");
        env::remove_var("NON_EXISTENT");
    }

    assert_eq!(
        required_env::env("TEST_VAR", None).unwrap().as_deref(),
        Some("test_value")
    );
    assert_eq!(required_env::env("NON_EXISTENT", None).unwrap(), None);
    assert_eq!(
        required_env::env("NON_EXISTENT", Some("default")).unwrap().as_deref(),
        Some("default")
    );

    unsafe {
        env::remove_var("TEST_VAR");
    }
    reset();
}

#[test]
#[serial]
fn test_tracking_missing_variables() {
    reset();
    unsafe {
        env::remove_var("REQUIRED_VAR1");
        env::remove_var("REQUIRED_VAR2");
    }

    required_env::env("REQUIRED_VAR1", None).unwrap();
    required_env::env("REQUIRED_VAR2", None).unwrap();
    required_env::env("REQUIRED_VAR2", None).unwrap();

    let missing = global().missing();
    assert_eq!(missing.len(), 2);
    assert!(missing.contains("REQUIRED_VAR1"));
    assert!(missing.contains("REQUIRED_VAR2"));

    reset();
    assert_eq!(missing.len(), 0);
    assert!(!missing.contains("REQUIRED_VAR1"));
}

#[test]
#[serial]
fn test_check_without_missing_variables() {
    reset();

    assert!(global().check().is_ok());
}

#[test]
#[serial]
fn test_check_with_missing_variables() {
    reset();
    unsafe {
        env::remove_var("MISSING_VAR1");
        env::remove_var("MISSING_VAR2");
    }

    required_env::env("MISSING_VAR1", None).unwrap();
    required_env::env("MISSING_VAR2", None).unwrap();

    let err: EnvironmentVariableError = global().check().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Environment variables required: MISSING_VAR1, MISSING_VAR2"
    );
    assert_eq!(
        err.report(),
        "EnvironmentVariableError\n  MISSING_VAR1\n  MISSING_VAR2"
    );

    reset();
}

#[test]
#[serial]
fn test_variable_set_after_miss_stays_tracked() {
    reset();
    unsafe {
        env::remove_var("LATE_VAR");
    }

    assert_eq!(required_env::env("LATE_VAR", None).unwrap(), None);

    unsafe {
        env::set_var("LATE_VAR", "now");
    }
    assert_eq!(
        required_env::env("LATE_VAR", None).unwrap().as_deref(),
        Some("now")
    );
    assert!(global().missing().contains("LATE_VAR"));

    unsafe {
        env::remove_var("LATE_VAR");
    }
    reset();
}
