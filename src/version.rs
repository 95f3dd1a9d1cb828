//! Version string assembly from build-time metadata.
//!
//! Dev builds carry the short git SHA emitted by the build script; official
//! builds (the `release` feature) show a clean version with build date only.

/// Full version string shown by `aex --version`.
pub fn version_string() -> String {
    let base = env!("CARGO_PKG_VERSION");
    let date = env!("AEX_BUILD_DATE");

    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({} {})", base, sha, date),
        _ => format!("{} ({})", base, date),
    }
}
