//! External process scanner

use super::error::{ScanError, ScanResult};
use super::traits::Scanner;
use crate::corpus::Triplet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Scanner program used when nothing else is configured
pub const DEFAULT_SCANNER_PROGRAM: &str = "./rna";

/// Bytes of stderr kept in an exit-status error
const STDERR_TAIL_LEN: usize = 512;

/// Runs the scanner executable as a child process, one process per scan.
#[derive(Debug, Clone)]
pub struct ProcessScanner {
    program: PathBuf,
}

impl ProcessScanner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for scanning a triplet.
    ///
    /// Each value is a single argv element, so no shell quoting is involved
    /// and the strings reach the scanner verbatim.
    pub fn command_args(triplet: &Triplet) -> [String; 4] {
        [
            "--scan".to_string(),
            format!("--ss={}", triplet.structure_pattern),
            format!("--pos-var={}", triplet.position_variables),
            format!("--seq-nt={}", triplet.sequence),
        ]
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for ProcessScanner {
    fn default() -> Self {
        Self::new(DEFAULT_SCANNER_PROGRAM)
    }
}

impl Scanner for ProcessScanner {
    fn run(&self, triplet: &Triplet) -> ScanResult<Vec<String>> {
        let args = Self::command_args(triplet);
        log::debug!("Running {} {}", self.program.display(), args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ScanError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScanError::ExitStatus {
                program: self.program_name(),
                status: output.status,
                stderr: stderr_tail(&output.stderr),
            });
        }

        if !output.stderr.is_empty() {
            log::trace!("Scanner stderr: {}", String::from_utf8_lossy(&output.stderr));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| ScanError::Output {
            program: self.program_name(),
            reason: e.to_string(),
        })?;

        Ok(stdout.lines().map(str::to_owned).collect())
    }
}

/// Last part of stderr, trimmed, for error messages
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    if text.len() <= STDERR_TAIL_LEN {
        return text.to_string();
    }
    let mut start = text.len() - STDERR_TAIL_LEN;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &text[start..])
}
