//! Build information module
//!
//! Compile-time build metadata embedded by `build.rs`.

use serde::Serialize;

use crate::units::ConversionCategory;

/// Raw build number as set by the build script
const BUILD_NUMBER_RAW: Option<&str> = option_env!("CONVERSION_BUILD_NUMBER");

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("CONVERSION_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build number, 0 when built without the build script
pub fn build_number() -> u64 {
    BUILD_NUMBER_RAW.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Build information structure for serialization
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: build_number(),
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    fn banner(&self, default_category: ConversionCategory) -> Vec<String> {
        vec![
            "===============================================".to_string(),
            format!("  Conversion ({})", self.name),
            format!("  Version: {} | Build: {}", self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
            format!("  Default category: {}", default_category),
            "===============================================".to_string(),
        ]
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner(default_category: ConversionCategory) {
    for line in BuildInfo::current().banner(default_category) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_build_info() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "conversion");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.build_timestamp.is_empty());
    }

    #[test]
    fn test_banner_mentions_default_category() {
        let lines = BuildInfo::current().banner(ConversionCategory::Volume);
        assert!(lines.iter().any(|l| l.contains("Default category: Volume")));
    }
}
