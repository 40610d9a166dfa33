//! Scanner capability trait

use super::error::ScanResult;
use crate::corpus::Triplet;

/// Something that can scan one test case and report its raw output.
///
/// Implementations must be blocking and must not cache or retry: every call
/// is one scan. `Send + Sync` so scans can be spread over worker threads.
pub trait Scanner: Send + Sync {
    /// Scan a triplet, returning the scanner's standard output split into lines
    fn run(&self, triplet: &Triplet) -> ScanResult<Vec<String>>;
}

impl<S: Scanner + ?Sized> Scanner for &S {
    fn run(&self, triplet: &Triplet) -> ScanResult<Vec<String>> {
        (**self).run(triplet)
    }
}

impl<S: Scanner + ?Sized> Scanner for std::sync::Arc<S> {
    fn run(&self, triplet: &Triplet) -> ScanResult<Vec<String>> {
        (**self).run(triplet)
    }
}

impl<S: Scanner + ?Sized> Scanner for Box<S> {
    fn run(&self, triplet: &Triplet) -> ScanResult<Vec<String>> {
        (**self).run(triplet)
    }
}
