//! Corpus data types

use std::fmt;

/// One test case from the corpus: structure pattern, position variables
/// and the sequence to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triplet {
    pub structure_pattern: String,
    pub position_variables: String,
    pub sequence: String,
}

impl Triplet {
    pub fn new(
        structure_pattern: impl Into<String>,
        position_variables: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            structure_pattern: structure_pattern.into(),
            position_variables: position_variables.into(),
            sequence: sequence.into(),
        }
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ss={:?} pos_var={:?} seq={:?}",
            self.structure_pattern, self.position_variables, self.sequence
        )
    }
}
