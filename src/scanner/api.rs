//! Scanner API
//!
//! Public surface of the scanner module, kept in one place like the other
//! `api` modules.

pub use crate::scanner::error::{ScanError, ScanResult};
pub use crate::scanner::process::{ProcessScanner, DEFAULT_SCANNER_PROGRAM};
pub use crate::scanner::traits::Scanner;
