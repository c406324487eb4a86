//! Command execution integration tests
//!
//! These tests assume a Unix-like environment with `cat`, `sh` and `echo`.

use std::fs;

use genery::{
    Error,
    cmd::{CmdError, as_file, runcmd},
};

#[test]
fn test_runcmd_captures_stdout() {
    let out = runcmd(&["echo", "hello", "world"], None).unwrap();
    assert_eq!(out, b"hello world\n");
}

#[test]
fn test_runcmd_pipes_stdin() {
    let out = runcmd(&["cat"], Some(b"piped input".as_slice())).unwrap();
    assert_eq!(out, b"piped input");
}

#[test]
fn test_runcmd_missing_executable() {
    let err = runcmd(&["genery-no-such-command", "--help"], None).unwrap_err();
    assert!(matches!(err, CmdError::MissingCommand { ref command } if command == "genery-no-such-command"));

    let err: Error = err.into();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "cmd");
}

#[test]
fn test_runcmd_failure_reports_output() {
    let err = runcmd(&["sh", "-c", "echo partial; echo broken >&2; exit 3"], None).unwrap_err();

    assert_eq!(err.exit_code(), Some(3));
    assert_eq!(err.executable(), Some("sh"));
    let message = err.to_string();
    assert!(message.starts_with("The command `sh -c echo partial; echo broken >&2; exit 3` failed with exit code 3\n"));
    assert!(message.contains("------------- stdout -------------\npartial\n"));
    assert!(message.ends_with("------------- stderr -------------\nbroken\n"));
}

#[test]
fn test_as_file_is_removed_on_drop() {
    let file = as_file(b"temporary bytes").unwrap();
    let path = file.path().to_path_buf();

    assert_eq!(fs::read(&path).unwrap(), b"temporary bytes");
    drop(file);
    assert!(!path.exists());
}
