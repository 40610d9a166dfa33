//! Build metadata accessors.
//! This includes the generated version.rs from the build script into a core module,
//! providing a single source of truth for the provenance header.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Tool name as it appears in generated fixture headers
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Crate version from Cargo.toml
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Layout version of the emitted fixture blocks; bump when the C layout changes
pub const FIXTURE_FORMAT_VERSION: u32 = 1;

pub fn fixture_format_version() -> u32 {
    FIXTURE_FORMAT_VERSION
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Full tool identity, e.g. `scan-fixtures 0.1.0 (format 1, 3fa2c1d)`
pub fn tool_identity() -> String {
    format!(
        "{} {} (format {}, {})",
        TOOL_NAME,
        TOOL_VERSION,
        fixture_format_version(),
        git_hash()
    )
}
