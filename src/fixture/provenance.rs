//! Provenance of generated fixtures

use crate::core::version;
use chrono::NaiveDate;

/// Who generated the fixtures, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub tool: String,
    pub date: NaiveDate,
}

impl Provenance {
    pub fn new(tool: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            tool: tool.into(),
            date,
        }
    }

    /// This build of the tool, dated today (local time)
    pub fn current() -> Self {
        Self::new(version::tool_identity(), chrono::Local::now().date_naive())
    }
}
