//! Record processing loop

use super::error::{GenerateError, GenerateResult};
use crate::corpus::{Triplet, Triplets};
use crate::fixture::{FixtureEmitter, Provenance, TestRecord};
use crate::results::parse_hits;
use crate::scanner::Scanner;
use futures::StreamExt;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Fixture blocks written
    pub records: usize,
    /// Hits written over all blocks
    pub hits: usize,
    /// Incomplete trailing groups dropped from the corpus
    pub partial_groups: usize,
}

/// Corpus to fixtures, one record at a time.
///
/// With `jobs == 1` every record is scanned and written before the next
/// test case is read. With more jobs, up to `jobs` scans run at once on
/// blocking worker threads, but records are still written in corpus order.
pub struct Pipeline {
    scanner: Arc<dyn Scanner>,
    provenance: Provenance,
    jobs: usize,
}

impl Pipeline {
    pub fn new(scanner: Arc<dyn Scanner>, provenance: Provenance) -> Self {
        Self {
            scanner,
            provenance,
            jobs: 1,
        }
    }

    /// Number of scans allowed in flight; 0 is treated as 1
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Run the whole corpus. The first error stops the run; records before
    /// the failing test case have already been written.
    pub fn run<R: BufRead, W: Write>(
        &self,
        corpus: R,
        emitter: &mut FixtureEmitter<W>,
    ) -> GenerateResult<GenerationSummary> {
        emitter.write_header(&self.provenance)?;

        let records_before = emitter.records_emitted();
        let hits_before = emitter.hits_emitted();
        let mut triplets = Triplets::new(corpus);

        if self.jobs == 1 {
            self.run_sequential(&mut triplets, emitter)?;
        } else {
            self.run_concurrent(&mut triplets, emitter)?;
        }

        Ok(GenerationSummary {
            records: emitter.records_emitted() - records_before,
            hits: emitter.hits_emitted() - hits_before,
            partial_groups: triplets.partial_groups(),
        })
    }

    fn run_sequential<R: BufRead, W: Write>(
        &self,
        triplets: &mut Triplets<R>,
        emitter: &mut FixtureEmitter<W>,
    ) -> GenerateResult<()> {
        let capacity = emitter.settings().max_results;
        for (offset, triplet) in triplets.enumerate() {
            let record = scan_record(self.scanner.as_ref(), offset + 1, triplet?, capacity)?;
            emitter.emit(&record)?;
        }
        Ok(())
    }

    fn run_concurrent<R: BufRead, W: Write>(
        &self,
        triplets: &mut Triplets<R>,
        emitter: &mut FixtureEmitter<W>,
    ) -> GenerateResult<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .max_blocking_threads(self.jobs)
            .thread_name("scan-worker")
            .build()
            .map_err(GenerateError::Runtime)?;
        let capacity = emitter.settings().max_results;
        log::debug!("Scanning with up to {} concurrent jobs", self.jobs);

        runtime.block_on(async {
            let scans = futures::stream::iter(triplets.enumerate())
                .map(|(offset, triplet)| {
                    let scanner = Arc::clone(&self.scanner);
                    async move {
                        let index = offset + 1;
                        let triplet = triplet?;
                        tokio::task::spawn_blocking(move || {
                            scan_record(scanner.as_ref(), index, triplet, capacity)
                        })
                        .await
                        .map_err(|e| GenerateError::Worker {
                            index,
                            message: e.to_string(),
                        })?
                    }
                })
                .buffered(self.jobs);
            let mut scans = std::pin::pin!(scans);

            // `buffered` yields in submission order, whatever order scans finish in
            while let Some(record) = scans.next().await {
                emitter.emit(&record?)?;
            }
            Ok::<(), GenerateError>(())
        })
    }
}

/// Scan one test case and build its record
fn scan_record<S: Scanner + ?Sized>(
    scanner: &S,
    index: usize,
    triplet: Triplet,
    capacity: usize,
) -> GenerateResult<TestRecord> {
    log::info!("Scanning test {}: {}", index, triplet);

    let output = scanner
        .run(&triplet)
        .map_err(|source| GenerateError::Scan { index, source })?;
    log::trace!("Test {} scanner output: {:?}", index, output);

    let hits = parse_hits(&output).map_err(|source| GenerateError::Parse { index, source })?;
    Ok(TestRecord::new(index, triplet, hits, capacity)?)
}
