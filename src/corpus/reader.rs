//! Three-line group reader
//!
//! The reader is a small state machine over the corpus lines. Blank lines
//! are only treated as separators between groups; inside a group they are
//! kept as (empty) content.

use super::error::{CorpusError, CorpusResult};
use super::types::Triplet;
use std::io::{BufRead, Lines};

/// Lines gathered for the group currently being read
#[derive(Debug, Default)]
enum GroupState {
    #[default]
    Idle,
    One(String),
    Two(String, String),
}

/// Lazy, single-pass iterator over the triplets of a corpus.
///
/// Line terminators (`\n` or `\r\n`) are stripped. A trailing group of one
/// or two lines at end of input is dropped without an error; the number of
/// dropped groups is available from [`Triplets::partial_groups`].
pub struct Triplets<R> {
    lines: Lines<R>,
    state: GroupState,
    line_number: usize,
    partial_groups: usize,
    finished: bool,
}

impl<R: BufRead> Triplets<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            state: GroupState::Idle,
            line_number: 0,
            partial_groups: 0,
            finished: false,
        }
    }

    /// Number of corpus lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Number of incomplete trailing groups discarded at end of input
    pub fn partial_groups(&self) -> usize {
        self.partial_groups
    }

    fn finish(&mut self) {
        self.finished = true;
        match std::mem::take(&mut self.state) {
            GroupState::Idle => {}
            GroupState::One(_) | GroupState::Two(..) => {
                self.partial_groups += 1;
                log::debug!(
                    "Dropping incomplete test case at end of corpus (line {})",
                    self.line_number
                );
            }
        }
    }
}

impl<R: BufRead> Iterator for Triplets<R> {
    type Item = CorpusResult<Triplet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(source)) => {
                    self.finished = true;
                    return Some(Err(CorpusError::Read {
                        line: self.line_number + 1,
                        source,
                    }));
                }
                None => {
                    self.finish();
                    return None;
                }
            };
            self.line_number += 1;

            self.state = match std::mem::take(&mut self.state) {
                GroupState::Idle if line.is_empty() => GroupState::Idle,
                GroupState::Idle => GroupState::One(line),
                GroupState::One(structure_pattern) => GroupState::Two(structure_pattern, line),
                GroupState::Two(structure_pattern, position_variables) => {
                    log::trace!("Read test case ending at corpus line {}", self.line_number);
                    return Some(Ok(Triplet::new(
                        structure_pattern,
                        position_variables,
                        line,
                    )));
                }
            };
        }
    }
}
