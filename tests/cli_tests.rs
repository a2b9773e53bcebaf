//! Tests for the `netrc` binary.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_netrc(path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_netrc"))
        .arg(path)
        .env_remove("NETRC")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_netrc(dir: &TempDir, content: &str, mode: u32) -> std::path::PathBuf {
    let path = dir.path().join(".netrc");
    fs::write(&path, content).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

#[test]
fn test_success_exit_code_and_message() {
    let temp = TempDir::new().unwrap();
    let path = write_netrc(&temp, "machine m login joe password pw", 0o600);

    let output = run_netrc(&path);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        ".netrc file parsed without error"
    );
}

#[test]
fn test_parse_error_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let path = write_netrc(&temp, "machine m login", 0o600);

    let output = run_netrc(&path);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no value for token 'login'"));
}

#[test]
fn test_unsafe_permissions_exit_with_one() {
    let temp = TempDir::new().unwrap();
    let path = write_netrc(&temp, "machine m login joe", 0o644);

    let output = run_netrc(&path);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsafe permissions"));
}

#[test]
fn test_missing_file_exits_with_one() {
    let temp = TempDir::new().unwrap();

    let output = run_netrc(&temp.path().join("missing"));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}
