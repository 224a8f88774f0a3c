//! Settings structs and their defaults.

use std::path::PathBuf;

use crate::log::DEFAULT_SUBSYSTEM;
use crate::platform::{OsFamily, OsVersion, Platform};

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "rendertrace.log";

/// All rendertrace settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceConfig {
    pub logging: LoggingSettings,
    pub platform: PlatformSettings,
    pub profiling: ProfilingSettings,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Subsystem the framework's log categories are filed under
    pub subsystem: String,
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            subsystem: DEFAULT_SUBSYSTEM.to_string(),
            level: DEFAULT_LOG_LEVEL.to_string(),
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// `[platform]` section. `None` means detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformSettings {
    pub family: Option<OsFamily>,
    pub os_version: Option<OsVersion>,
}

impl PlatformSettings {
    /// The platform to resolve capabilities for.
    ///
    /// Configured values win. A version is only detected when the family is
    /// the one the process is actually running on.
    pub fn resolve(&self) -> Platform {
        if self.family.is_none() && self.os_version.is_none() {
            return Platform::detect();
        }

        let family = self.family.unwrap_or_else(OsFamily::current);
        let version = self.os_version.or_else(|| {
            if family == OsFamily::current() {
                Platform::detect().version
            } else {
                None
            }
        });
        Platform::new(family, version)
    }
}

/// `[profiling]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilingSettings {
    /// Emit signposts (also requires the `profiling` cargo feature for the
    /// call-site macros)
    pub signposts: bool,
}

impl Default for ProfilingSettings {
    fn default() -> Self {
        Self { signposts: true }
    }
}
