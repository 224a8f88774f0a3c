//! Helpers shared by the commands.

use std::path::Path;

use rendertrace::config::TraceConfig;
use rendertrace::platform::{OsFamily, OsVersion};

use crate::error::CliError;

/// Platform values given on the command line; they win over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformOverride {
    pub family: Option<OsFamily>,
    pub os_version: Option<OsVersion>,
}

/// Load the configuration from `path` (or the default location) and apply
/// command-line overrides.
pub fn load_config(
    path: Option<&Path>,
    overrides: PlatformOverride,
) -> Result<TraceConfig, CliError> {
    let mut config = match path {
        Some(p) => TraceConfig::load_from(p)?,
        None => TraceConfig::load()?,
    };

    if overrides.family.is_some() {
        config.platform.family = overrides.family;
    }
    if overrides.os_version.is_some() {
        config.platform.os_version = overrides.os_version;
    }
    Ok(config)
}
