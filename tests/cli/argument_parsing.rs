//! CLI argument parsing tests

use crate::common::run_binary;
use tempfile::TempDir;

#[test]
fn test_missing_corpus_argument_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let output = run_binary(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_too_many_arguments_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let output = run_binary(dir.path(), &["one.txt", "two.txt"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    let output = run_binary(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for option in ["--scanner", "--max-results", "--jobs", "--output", "--config-file"] {
        assert!(stdout.contains(option), "help is missing {}", option);
    }
}

#[test]
fn test_missing_corpus_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let output = run_binary(dir.path(), &["--no-color", "does-not-exist.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FATAL: Cannot open corpus"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_max_results_is_fatal() {
    let dir = TempDir::new().unwrap();
    let output = run_binary(dir.path(), &["-m", "0", "corpus.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max-results must be greater than 0"));
}
