//! Test records

use super::error::{FixtureError, FixtureResult};
use crate::corpus::Triplet;
use crate::results::Hit;

/// Capacity of the downstream results array (`MAX_NUM_RESULTS_PER_TEST`)
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// A test case together with the hits the scanner reported for it.
///
/// Records are only built through [`TestRecord::new`], which enforces the
/// capacity bound, and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    index: usize,
    triplet: Triplet,
    hits: Vec<Hit>,
}

impl TestRecord {
    /// Build a record for the 1-based test `index`.
    ///
    /// More hits than `capacity` is a consistency error, never truncated.
    pub fn new(
        index: usize,
        triplet: Triplet,
        hits: Vec<Hit>,
        capacity: usize,
    ) -> FixtureResult<Self> {
        check_capacity(index, hits.len(), capacity)?;
        Ok(Self {
            index,
            triplet,
            hits,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn triplet(&self) -> &Triplet {
        &self.triplet
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }
}

pub(crate) fn check_capacity(index: usize, hits: usize, capacity: usize) -> FixtureResult<()> {
    if hits > capacity {
        return Err(FixtureError::CapacityExceeded {
            index,
            hits,
            capacity,
        });
    }
    Ok(())
}
