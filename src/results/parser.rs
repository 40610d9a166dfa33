//! Scanner output grammar
//!
//! Output lines are either diagnostics (empty, or starting with `found`) or
//! result lines of the form
//!
//! ```text
//! [<annotation> "-> "]<from>,<to>(<trailing text>)
//! ```
//!
//! A result line may chain several position pairs joined by `-> `; the pair
//! after the last marker is the reported hit. Positions may be padded with
//! spaces. Any other line is an error.

use super::error::{ResultParseError, ResultParseResult};
use super::types::Hit;
use regex::Regex;
use std::sync::LazyLock;

/// Prefix of informational scanner lines
const DIAGNOSTIC_PREFIX: &str = "found";

/// Separator between an annotation and the reported position pair
const CHAIN_MARKER: &str = "-> ";

static RESULT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<from>[0-9]+)\s*,\s*(?P<to>[0-9]+)\s*\(")
        .expect("result line grammar is a valid regex")
});

/// Parse one line of scanner output.
///
/// Returns `Ok(None)` for diagnostic lines, `Ok(Some(hit))` for result
/// lines. `line_number` is only used for error reporting.
pub fn parse_result_line(line_number: usize, line: &str) -> ResultParseResult<Option<Hit>> {
    let trimmed = line.trim_end_matches('\r');
    if trimmed.is_empty() || trimmed.starts_with(DIAGNOSTIC_PREFIX) {
        return Ok(None);
    }

    let body = match trimmed.rfind(CHAIN_MARKER) {
        Some(idx) => &trimmed[idx + CHAIN_MARKER.len()..],
        None => trimmed,
    };

    let captures = RESULT_LINE
        .captures(body)
        .ok_or_else(|| ResultParseError::Malformed {
            line_number,
            line: line.to_string(),
        })?;

    let position = |name: &str| -> ResultParseResult<u32> {
        captures[name]
            .parse::<u32>()
            .map_err(|source| ResultParseError::Position {
                line_number,
                line: line.to_string(),
                source,
            })
    };

    Ok(Some(Hit::new(position("from")?, position("to")?)))
}

/// Parse complete scanner output into hits, in the order they were reported.
///
/// Stops at the first line that fits neither the diagnostic nor the result
/// shape; no partial hit list is returned in that case.
pub fn parse_hits<I, S>(lines: I) -> ResultParseResult<Vec<Hit>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hits = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(hit) = parse_result_line(idx + 1, line.as_ref())? {
            log::trace!("Scanner reported hit {}", hit);
            hits.push(hit);
        }
    }
    Ok(hits)
}
