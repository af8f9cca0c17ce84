//! Build metadata embedded by `build.rs`

use serde::Serialize;

/// Build counter, 0 when built without the build script's env vars
pub const BUILD_NUMBER: u64 = match option_env!("SHREKDROID_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// ISO 8601 compile time
pub const BUILD_TIMESTAMP: &str = match option_env!("SHREKDROID_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// `str::parse` isn't const
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return None;
        }
        result = result * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    Some(result)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }
}

/// Startup banner on stderr; stdout belongs to the MCP transport
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!(
        "Shrekdroid {} (build {}, {}) - everything measured in Shreks",
        info.version, info.build_number, info.build_timestamp
    );
}
