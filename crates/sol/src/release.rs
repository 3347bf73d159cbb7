use anyhow::{Context, Result};
use semver::Version;

const RELEASE_BASE: &str = "https://nodejs.org/download/release";

/// Parse a user-supplied version, with or without the leading `v`.
pub fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw.trim_start_matches('v')).with_context(|| format!("invalid version '{raw}'"))
}

/// Release archive URL for this platform, following the upstream naming
/// scheme `node-v<version>-<os>-<arch>.tar.gz`.
pub fn release_url(version: &Version) -> String {
    format!(
        "{RELEASE_BASE}/v{version}/node-v{version}-{}.tar.gz",
        platform()
    )
}

pub fn platform() -> String {
    format!("{}-{}", os_name(), arch_name())
}

fn os_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin"
    } else if cfg!(target_os = "windows") {
        "win"
    } else {
        "linux"
    }
}

fn arch_name() -> &'static str {
    if cfg!(target_arch = "aarch64") {
        "arm64"
    } else {
        "x64"
    }
}
