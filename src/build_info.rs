//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `cyber-flap 0.1.0 (2026-01-31, abc1234)`
pub fn version_string() -> String {
    format!(
        "cyber-flap {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
