//! INI parsing logic for converting `Ini` → `TraceConfig`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigError;
use super::settings::TraceConfig;

/// Parse an `Ini` object into a `TraceConfig`.
///
/// Starts from `TraceConfig::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<TraceConfig, ConfigError> {
    let mut config = TraceConfig::default();

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section.get("subsystem")) {
            config.logging.subsystem = v.to_string();
        }
        if let Some(v) = non_empty(section.get("level")) {
            config.logging.level = v.to_string();
        }
        if let Some(v) = non_empty(section.get("directory")) {
            config.logging.directory = expand_tilde(v);
        }
        if let Some(v) = non_empty(section.get("file")) {
            config.logging.file = v.to_string();
        }
    }

    // [platform] section
    if let Some(section) = ini.section(Some("platform")) {
        if let Some(v) = non_empty(section.get("family")) {
            if !v.eq_ignore_ascii_case("auto") {
                let family = v.parse().map_err(|_| {
                    invalid("platform", "family", v, "must be one of: auto, ios, macos, other")
                })?;
                config.platform.family = Some(family);
            }
        }
        if let Some(v) = non_empty(section.get("os_version")) {
            if !v.eq_ignore_ascii_case("auto") {
                config.platform.os_version = Some(v.parse().map_err(|e| {
                    invalid(
                        "platform",
                        "os_version",
                        v,
                        &format!("expected 'auto' or a version like '10.3' ({})", e),
                    )
                })?);
            }
        }
    }

    // [profiling] section
    if let Some(section) = ini.section(Some("profiling")) {
        if let Some(v) = non_empty(section.get("signposts")) {
            config.profiling.signposts = parse_bool(v)
                .ok_or_else(|| invalid("profiling", "signposts", v, "must be true or false"))?;
        }
    }

    Ok(config)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Expand a leading `~` to the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
