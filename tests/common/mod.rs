//! Common test utilities and helpers
//!
//! Fake scanner scripts, corpus files and a runner for the built binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path of the binary under test
pub fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_scan-fixtures"))
}

/// Run the binary with arguments, from `dir`, with no user config in the way
pub fn run_binary(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .output()
        .expect("failed to run scan-fixtures")
}

/// Write a corpus file into `dir`
pub fn write_corpus(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("corpus.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Write an executable shell script standing in for the scanner.
///
/// The script sees the usual `--scan --ss=.. --pos-var=.. --seq-nt=..`
/// arguments; `body` decides what it prints.
#[cfg(unix)]
pub fn write_scanner(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Scanner script that reports two hits per test case, derived from the
/// sequence length, so every test case gets distinct output.
#[cfg(unix)]
pub fn write_length_scanner(dir: &TempDir) -> PathBuf {
    write_scanner(
        dir,
        "rna",
        r#"for arg in "$@"; do
  case "$arg" in
    --seq-nt=*) seq="${arg#--seq-nt=}" ;;
  esac
done
echo "found candidates for $seq"
echo "1,${#seq}(outer)"
echo "outer -> 2,$(( ${#seq} - 1 ))(inner)""#,
    )
}

/// Lines of the emitted fixtures that start a test block
pub fn test_headers(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("/* test "))
        .map(str::to_string)
        .collect()
}
