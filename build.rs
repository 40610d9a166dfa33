use std::path::PathBuf;
use std::process::Command;

// Provenance data for generated fixture headers: build time and git revision.
fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());

    let build_time = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let git_hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());

    std::fs::write(
        out_dir.join("version.rs"),
        format!(
            "pub const BUILD_TIME: &str = \"{build_time}\";\npub const GIT_HASH: &str = \"{git_hash}\";\n"
        ),
    )?;

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
