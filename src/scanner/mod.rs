//! Scan invocation
//!
//! Runs the external pattern scanner once per test case and hands back its
//! raw output lines. The [`Scanner`] trait is the seam between the pipeline
//! and the process: production code uses [`ProcessScanner`], tests use an
//! in-memory double.

pub mod api;
pub mod error;
pub mod process;
pub mod traits;

pub use error::{ScanError, ScanResult};
pub use process::ProcessScanner;
pub use traits::Scanner;
