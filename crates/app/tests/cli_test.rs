//! End-to-end tests for the `timenow` binary.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn timenow(args: &[&str], stdin: &str) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_timenow"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("TIMENOW_PROVIDER")
        .env_remove("TIMENOW_LOG_LEVEL")
        .env_remove("TIMENOW_FIXED_TIME")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_read_external_protocol() {
    let output = timenow(&["--at", "2024-03-15T14:30:45Z"], "{}");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "day": "15",
            "hour": "14",
            "minute": "30",
            "month": "3",
            "rfc3339": "2024-03-15T14:30:45Z",
            "second": "45",
            "unix": "1710513045",
            "year": "2024",
        })
    );
}

#[test]
fn test_schema_uses_provider_name() {
    let output = timenow(&["--provider", "clock", "schema"], "");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type_name"], "clock_now");
}

#[test]
fn test_invalid_query_fails() {
    let output = timenow(&["read"], "[]");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_provider_namespace_is_used_verbatim() {
    let output = timenow(&["--provider", "google-beta", "schema"], "");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type_name"], "google-beta_now");
}

#[test]
fn test_query_arguments_do_not_change_output() {
    let output = timenow(
        &["--at", "1970-01-01T00:00:00Z"],
        r#"{"trigger": "rotate-2024"}"#,
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["unix"], "0");
    assert!(json.get("trigger").is_none());
}
