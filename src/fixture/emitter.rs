//! C fixture writer
//!
//! Output layout, one block per record after a single provenance header:
//!
//! ```text
//!     /* test 1 */
//!     strcpy (     ss[t], "(((...)))");
//!     strcpy (pos_var[t], "0000000000");
//!     strcpy (    seq[t], "GCGAAACGC");
//!     r=0;
//!     results[t][r].fp_posn=5;  results[t][r++].tp_posn=12;
//!     num_results[t]=r;
//!     assert (r<=MAX_NUM_RESULTS_PER_TEST);
//!     t++;
//! ```

use super::error::FixtureResult;
use super::provenance::Provenance;
use super::record::{check_capacity, TestRecord, DEFAULT_MAX_RESULTS};
use std::io::Write;

pub const DEFAULT_INDENT: &str = "    ";
pub const DEFAULT_CAPACITY_MACRO: &str = "MAX_NUM_RESULTS_PER_TEST";

/// Layout and capacity settings for emitted fixtures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSettings {
    pub indent: String,
    pub max_results: usize,
    pub capacity_macro: String,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            capacity_macro: DEFAULT_CAPACITY_MACRO.to_string(),
        }
    }
}

/// Streams fixture blocks to a writer, flushing after each record
pub struct FixtureEmitter<W: Write> {
    writer: W,
    settings: FixtureSettings,
    header_written: bool,
    records: usize,
    hits: usize,
}

impl<W: Write> FixtureEmitter<W> {
    pub fn new(writer: W, settings: FixtureSettings) -> Self {
        Self {
            writer,
            settings,
            header_written: false,
            records: 0,
            hits: 0,
        }
    }

    pub fn settings(&self) -> &FixtureSettings {
        &self.settings
    }

    /// Write the provenance comment. Only the first call writes anything.
    pub fn write_header(&mut self, provenance: &Provenance) -> FixtureResult<()> {
        if self.header_written {
            return Ok(());
        }

        let indent = &self.settings.indent;
        let mut block = String::new();
        block.push_str(&format!("{indent}/*\n"));
        block.push_str(&format!(
            "{indent} * auto-generated test cases by {} on {}\n",
            provenance.tool,
            provenance.date.format("%Y-%m-%d")
        ));
        block.push_str(&format!("{indent} */\n\n"));

        self.writer.write_all(block.as_bytes())?;
        self.writer.flush()?;
        self.header_written = true;
        Ok(())
    }

    /// Write one record. Nothing is written if the record breaks the capacity bound.
    pub fn emit(&mut self, record: &TestRecord) -> FixtureResult<()> {
        check_capacity(record.index(), record.hits().len(), self.settings.max_results)?;

        let block = self.render(record);
        self.writer.write_all(block.as_bytes())?;
        self.writer.flush()?;

        self.records += 1;
        self.hits += record.hits().len();
        log::debug!(
            "Emitted test {} with {} results",
            record.index(),
            record.hits().len()
        );
        Ok(())
    }

    fn render(&self, record: &TestRecord) -> String {
        let indent = &self.settings.indent;
        let triplet = record.triplet();
        let mut block = String::new();

        block.push_str(&format!("{indent}/* test {} */\n", record.index()));
        block.push_str(&format!(
            "{indent}strcpy (     ss[t], \"{}\");\n",
            triplet.structure_pattern
        ));
        block.push_str(&format!(
            "{indent}strcpy (pos_var[t], \"{}\");\n",
            triplet.position_variables
        ));
        block.push_str(&format!("{indent}strcpy (    seq[t], \"{}\");\n", triplet.sequence));
        block.push_str(&format!("{indent}r=0;\n"));
        for hit in record.hits() {
            block.push_str(&format!(
                "{indent}results[t][r].fp_posn={};  results[t][r++].tp_posn={};\n",
                hit.from_position, hit.to_position
            ));
        }
        block.push_str(&format!("{indent}num_results[t]=r;\n"));
        block.push_str(&format!(
            "{indent}assert (r<={});\n",
            self.settings.capacity_macro
        ));
        block.push_str(&format!("{indent}t++;\n\n"));
        block
    }

    /// Records written so far
    pub fn records_emitted(&self) -> usize {
        self.records
    }

    /// Hits written so far, over all records
    pub fn hits_emitted(&self) -> usize {
        self.hits
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> FixtureResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
