//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for command in ["secrets", "get", "export", "run", "completions"] {
        assert!(out.contains(command), "help missing {}", command);
    }
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "bullpen");
}

#[test]
fn test_not_logged_in() {
    let t = Test::new();

    let output = t.secrets();
    assert_failure(&output);
    assert_stderr_contains(&output, "not logged in");
    assert_stderr_contains(&output, "BULLPEN_TOKEN");
}

#[test]
fn test_get_requires_a_key() {
    let t = Test::new();

    let output = t.run(&["get"]);
    assert_failure(&output);
}

#[test]
fn test_export_rejects_unknown_format() {
    let t = Test::new();

    let output = t.run(&["export", "--format", "yaml"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "yaml");
}

#[test]
fn test_verbose_logs_path_selection() {
    let t = Test::new();

    let output = t.run(&["--verbose", "secrets"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "logged in user session");
}

#[test]
fn test_log_filter_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("BULLPEN_LOG", "bullpen=debug")
        .arg("secrets")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "DEBUG");
}
