//! Fixture generation through the binary with a stand-in scanner

#![cfg(unix)]

use crate::common::{run_binary, test_headers, write_corpus, write_length_scanner, write_scanner};
use tempfile::TempDir;

#[test]
fn test_generates_fixtures_on_stdout() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "(((...)))\n0000000000\nGCGAAACGC\n\n((..))\n000000\nGGAACC");
    write_length_scanner(&dir);

    let output = run_binary(dir.path(), &["corpus.txt"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("    /*\n     * auto-generated test cases by scan-fixtures "));
    assert_eq!(test_headers(&stdout), vec!["/* test 1 */", "/* test 2 */"]);

    let first_block = stdout.split("/* test 2 */").next().unwrap();
    assert!(first_block.contains("    strcpy (     ss[t], \"(((...)))\");\n"));
    assert!(first_block.contains("    strcpy (pos_var[t], \"0000000000\");\n"));
    assert!(first_block.contains("    strcpy (    seq[t], \"GCGAAACGC\");\n"));
    assert!(first_block.contains(
        "    results[t][r].fp_posn=1;  results[t][r++].tp_posn=9;\n    results[t][r].fp_posn=2;  results[t][r++].tp_posn=8;\n"
    ));
    assert!(stdout.ends_with("    assert (r<=MAX_NUM_RESULTS_PER_TEST);\n    t++;\n\n"));
}

#[test]
fn test_output_file_and_jobs() {
    let dir = TempDir::new().unwrap();
    let corpus: String = (1..=12)
        .map(|i| format!("s{}\np{}\n{}\n\n", i, i, "A".repeat(i + 2)))
        .collect();
    write_corpus(&dir, &corpus);
    write_length_scanner(&dir);

    let sequential = run_binary(dir.path(), &["-O", "seq.out", "corpus.txt"]);
    assert!(sequential.status.success());
    let parallel = run_binary(dir.path(), &["-O", "par.out", "-j", "4", "corpus.txt"]);
    assert!(parallel.status.success());
    assert!(parallel.stdout.is_empty());

    let seq_out = std::fs::read_to_string(dir.path().join("seq.out")).unwrap();
    let par_out = std::fs::read_to_string(dir.path().join("par.out")).unwrap();
    assert_eq!(test_headers(&seq_out).len(), 12);
    assert_eq!(seq_out, par_out);
}

#[test]
fn test_partial_trailing_group_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n\nd\ne\n");
    write_length_scanner(&dir);

    let output = run_binary(dir.path(), &["corpus.txt"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(test_headers(&stdout), vec!["/* test 1 */"]);
}

#[test]
fn test_scanner_failure_aborts_run() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nGOOD\nd\ne\nBAD\ng\nh\nGOOD\n");
    write_scanner(
        &dir,
        "rna",
        r#"case "$4" in
  --seq-nt=BAD) echo "cannot parse structure" >&2; exit 2 ;;
esac
echo "1,2(x)""#,
    );

    let output = run_binary(dir.path(), &["--no-color", "corpus.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(test_headers(&stdout), vec!["/* test 1 */"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Test 2"), "stderr: {}", stderr);
    assert!(stderr.contains("cannot parse structure"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_scanner_output_aborts_run() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n");
    write_scanner(&dir, "rna", "echo 'found 1'\necho 'segfault at 0x0'");

    let output = run_binary(dir.path(), &["--no-color", "corpus.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(test_headers(&stdout).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("segfault at 0x0"), "stderr: {}", stderr);
}

#[test]
fn test_capacity_overflow_aborts_run() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n");
    write_scanner(&dir, "rna", "echo '1,2(a)'\necho '3,4(b)'\necho '5,6(c)'");

    let output = run_binary(dir.path(), &["--no-color", "-m", "2", "corpus.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("more than the capacity of 2"), "stderr: {}", stderr);
}

#[test]
fn test_missing_scanner_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n");

    let output = run_binary(dir.path(), &["--no-color", "-s", "./not-here", "corpus.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot run scanner './not-here'"), "stderr: {}", stderr);
}

#[test]
fn test_verbose_logs_progress_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, "a\nb\nc\n");
    write_length_scanner(&dir);

    let output = run_binary(dir.path(), &["-v", "--no-color", "corpus.txt"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stderr.contains("INF Scanning test 1"), "stderr: {}", stderr);
    assert!(!stdout.contains("INF"));
}
