//! Tests for the run command.

use crate::support::*;

#[test]
fn test_run_requires_command() {
    let t = Test::new();

    let output = t.run(&["run"]);
    assert_failure(&output);
}

#[test]
fn test_run_does_not_start_child_without_secrets() {
    let t = Test::new();
    let marker = t.dir.path().join("ran");

    let output = t.run(&["run", "--", "touch", marker.to_str().unwrap()]);
    assert_failure(&output);
    assert!(!marker.exists());
    assert_stderr_contains(&output, "not logged in");
}
