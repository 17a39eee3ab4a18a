//! Native library version.

/// Version string reported to the host app.
pub const NATIVE_VERSION: &str = "1.0.0";

/// Returns [`NATIVE_VERSION`]; the host calls this to check that the library loaded.
pub fn native_version() -> &'static str {
    tracing::info!("native library version: {}", NATIVE_VERSION);
    NATIVE_VERSION
}
