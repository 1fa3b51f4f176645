//! Version information shown in the UI chrome.

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Format the version as a display string, e.g. `v0.1.0`.
pub fn format_version() -> String {
    format!("v{}", build_version())
}
