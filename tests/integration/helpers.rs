//! Shared helpers for CLI integration tests.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Identity environment variables cleared before every run so tests are
/// isolated from the developer's shell.
pub const IDENTITY_ENV_VARS: &[&str] = &[
    "TOKSIFT_FULL_NAME",
    "TOKSIFT_DOB_DDMMYYYY",
    "TOKSIFT_EMAIL",
    "TOKSIFT_ROLL_NUMBER",
];

/// Runs the toksift binary with an isolated config dir and optional stdin.
///
/// Returns (stdout, stderr, exit code).
pub fn run_toksift(args: &[&str], stdin: Option<&str>, config_dir: &Path) -> (String, String, i32) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_toksift"));
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env("TOKSIFT_CONFIG_DIR", config_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for var in IDENTITY_ENV_VARS {
        cmd.env_remove(var);
    }

    match stdin {
        Some(input) => {
            cmd.stdin(Stdio::piped());
            let mut child = cmd.spawn().expect("Failed to spawn toksift");
            child
                .stdin
                .take()
                .expect("stdin should be piped")
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
            finish(child.wait_with_output().expect("Failed to wait for toksift"))
        }
        None => {
            cmd.stdin(Stdio::null());
            finish(cmd.output().expect("Failed to execute toksift"))
        }
    }
}

fn finish(output: std::process::Output) -> (String, String, i32) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Parses the single-line JSON envelope a successful run prints.
pub fn parse_envelope(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be a JSON envelope")
}
