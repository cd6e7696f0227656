//! Service token handling on the command line.

use crate::support::*;

#[test]
fn test_malformed_token_flag() {
    let t = Test::new();

    let output = t.run(&["--token", "st.only.three", "secrets"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid service token");
    assert_stderr_contains(&output, "four dot-separated parts");
}

#[test]
fn test_malformed_token_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("BULLPEN_TOKEN", "not-a-token")
        .arg("export")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid service token");
}

#[test]
fn test_token_path_skips_session_and_config() {
    // no session and no .bullpen.toml: the token alone selects the path
    let t = Test::new();

    let output = t.run(&["--token", &service_token(), "secrets"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unable to get service token details");
}

#[test]
fn test_token_secret_never_printed() {
    let t = Test::new();

    let output = t.run(&["--verbose", "--token", &service_token(), "secrets"]);
    assert_failure(&output);
    assert_output_excludes(&output, TOKEN_SECRET);
}

#[test]
fn test_help_hides_token_value() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("BULLPEN_TOKEN", service_token())
        .arg("--help")
        .output()
        .unwrap();
    assert_success(&output);
    assert_output_excludes(&output, TOKEN_SECRET);
}
