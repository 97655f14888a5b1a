//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("TSM_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("TSM_BUILD_TIMESTAMP");

/// Render the version block used by `tsm version` and `tsm --version`.
pub fn cli_version_text() -> String {
    format!("tsm {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_version_text_includes_expected_lines() {
        let text = cli_version_text();
        assert!(text.starts_with("tsm "));
        assert!(text.contains(VERSION));
        assert!(text.contains("commit:"));
        assert!(text.contains("built:"));
    }
}
