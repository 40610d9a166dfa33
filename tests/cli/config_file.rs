//! CLI configuration file tests

use crate::common::{run_binary, write_corpus};
use tempfile::TempDir;

#[test]
fn test_missing_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n");
    let output = run_binary(dir.path(), &["-c", "missing.toml", "corpus.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_config_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n");
    std::fs::write(dir.path().join("bad.toml"), "scaner = \"./rna\"\n").unwrap();
    let output = run_binary(dir.path(), &["-c", "bad.toml", "corpus.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing configuration file"), "stderr: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_config_file_supplies_scanner_and_layout() {
    use crate::common::{test_headers, write_scanner};

    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n");
    write_scanner(&dir, "custom-scanner", "echo '7,9(x)'");
    std::fs::write(
        dir.path().join("fixtures.toml"),
        "scanner = \"./custom-scanner\"\nindent = \"\\t\"\ncapacity-macro = \"MAX_HITS\"\n",
    )
    .unwrap();

    let output = run_binary(dir.path(), &["-c", "fixtures.toml", "corpus.txt"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(test_headers(&stdout), vec!["/* test 1 */"]);
    assert!(stdout.contains("\tresults[t][r].fp_posn=7;  results[t][r++].tp_posn=9;\n"));
    assert!(stdout.contains("\tassert (r<=MAX_HITS);\n"));
}
