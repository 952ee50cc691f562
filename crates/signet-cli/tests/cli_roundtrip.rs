//! Integration tests for the `signet` binary.

use std::process::Command;

use tempfile::TempDir;

fn signet_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_signet"));
    // Keep ambient configuration out of the tests
    cmd.env_remove("SIGNET_SECRET");
    cmd
}

fn write_payload(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("payload.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_sign_then_verify_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let payload = write_payload(&tmp, r#"{"user_id":"42"}"#);

    let output = signet_cmd()
        .arg("sign")
        .arg(&payload)
        .args(["--secret", "s3cr3t"])
        .output()
        .expect("failed to run signet sign");
    assert!(output.status.success(), "sign should succeed");

    let token = String::from_utf8(output.stdout).unwrap();
    let token = token.trim();
    assert_eq!(token.matches('.').count(), 1, "token should have one separator");

    let output = signet_cmd()
        .args(["verify", token, "--secret", "s3cr3t"])
        .output()
        .expect("failed to run signet verify");
    assert!(output.status.success(), "verify should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"user_id\""), "payload should be printed");
    assert!(stdout.contains("\"42\""));
}

#[test]
fn test_verify_wrong_secret_exit_code() {
    let tmp = TempDir::new().unwrap();
    let payload = write_payload(&tmp, r#"{"user_id":"42"}"#);

    let output = signet_cmd()
        .arg("sign")
        .arg(&payload)
        .args(["--secret", "s3cr3t"])
        .output()
        .expect("failed to run signet sign");
    let token = String::from_utf8(output.stdout).unwrap();

    let output = signet_cmd()
        .args(["verify", token.trim(), "--secret", "wrong"])
        .output()
        .expect("failed to run signet verify");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(4), "signature mismatch maps to exit 4");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("signature mismatch"));
}

#[test]
fn test_verify_malformed_token_exit_code() {
    let output = signet_cmd()
        .args(["verify", "not-a-token", "--secret", "s3cr3t"])
        .output()
        .expect("failed to run signet verify");

    assert_eq!(output.status.code(), Some(1), "decode errors map to exit 1");
}

#[test]
fn test_verify_quiet_suppresses_output() {
    let output = signet_cmd()
        .args(["verify", "not-a-token", "--secret", "s3cr3t", "--quiet"])
        .output()
        .expect("failed to run signet verify");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "quiet mode should print nothing");
    assert!(output.stderr.is_empty(), "quiet mode should print no errors");
}

#[test]
fn test_secret_file_with_trailing_newline() {
    let tmp = TempDir::new().unwrap();
    let payload = write_payload(&tmp, r#"{"user_id":"42"}"#);

    let secret_path = tmp.path().join("secret");
    std::fs::write(&secret_path, "s3cr3t\n").unwrap();

    let output = signet_cmd()
        .arg("sign")
        .arg(&payload)
        .args(["--secret", "s3cr3t"])
        .output()
        .expect("failed to run signet sign");
    let token = String::from_utf8(output.stdout).unwrap();

    let output = signet_cmd()
        .args(["verify", token.trim(), "--secret-file"])
        .arg(&secret_path)
        .output()
        .expect("failed to run signet verify");

    assert!(output.status.success(), "file-sourced secret should verify");
}

#[test]
fn test_secret_from_environment() {
    let tmp = TempDir::new().unwrap();
    let payload = write_payload(&tmp, r#"{"user_id":"42"}"#);

    let output = signet_cmd()
        .arg("sign")
        .arg(&payload)
        .env("SIGNET_SECRET", "s3cr3t")
        .output()
        .expect("failed to run signet sign");
    assert!(output.status.success());
    let token = String::from_utf8(output.stdout).unwrap();

    let output = signet_cmd()
        .args(["verify", token.trim()])
        .env("SIGNET_SECRET", "s3cr3t")
        .output()
        .expect("failed to run signet verify");
    assert!(output.status.success());
}

#[test]
fn test_sign_rejects_non_object_payload() {
    let tmp = TempDir::new().unwrap();
    let payload = write_payload(&tmp, r#"[1,2,3]"#);

    let output = signet_cmd()
        .arg("sign")
        .arg(&payload)
        .args(["--secret", "s3cr3t"])
        .output()
        .expect("failed to run signet sign");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON object"));
}

#[test]
fn test_missing_secret_is_an_error() {
    let output = signet_cmd()
        .args(["verify", "a.b"])
        .output()
        .expect("failed to run signet verify");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--secret"));
}
