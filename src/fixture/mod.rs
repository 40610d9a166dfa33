//! Fixture emission
//!
//! Builds checked test records and writes them as C declaration blocks that
//! the regression suite includes directly.

pub mod emitter;
pub mod error;
pub mod provenance;
pub mod record;

pub use emitter::{FixtureEmitter, FixtureSettings, DEFAULT_CAPACITY_MACRO, DEFAULT_INDENT};
pub use error::{FixtureError, FixtureResult};
pub use provenance::Provenance;
pub use record::{TestRecord, DEFAULT_MAX_RESULTS};
