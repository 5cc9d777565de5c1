//! CLI surface tests: help, version, completions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn toksift() -> Command {
    let mut cmd = Command::cargo_bin("toksift").expect("binary should build");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_exits_0_and_lists_subcommands() {
    toksift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn classify_help_describes_request_shape() {
    toksift()
        .args(["classify", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("response envelope"))
        .stdout(predicate::str::contains("--pretty"));
}

#[test]
fn version_flag_reports_crate_version() {
    toksift()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_is_a_usage_error() {
    toksift()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn completions_bash_mentions_binary_name() {
    toksift()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toksift"));
}

#[test]
fn classify_with_tty_like_missing_input_reports_error() {
    // Stdin closed (not a TTY) with no file: reads empty input, which is a
    // decode failure envelope rather than an I/O error.
    let dir = TempDir::new().unwrap();
    toksift()
        .arg("classify")
        .env("TOKSIFT_CONFIG_DIR", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_success\":false"));
}
