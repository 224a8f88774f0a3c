//! INI serialization logic for converting `TraceConfig` → INI string.

use std::path::Path;

use super::settings::TraceConfig;

/// Convert a `TraceConfig` to a commented INI string for saving.
pub(super) fn to_config_string(config: &TraceConfig) -> String {
    let family = config
        .platform
        .family
        .map(|f| f.as_str().to_string())
        .unwrap_or_else(|| "auto".to_string());
    let os_version = config
        .platform
        .os_version
        .map(|v| v.to_string())
        .unwrap_or_else(|| "auto".to_string());

    format!(
        r#"[logging]
; Subsystem the framework's log categories (Layout, Render, Collections) are filed under
subsystem = {}
; Default filter when RUST_LOG is not set (e.g. info, debug, rendertrace=trace)
level = {}
; Directory and file for the log written alongside stdout
directory = {}
file = {}

[platform]
; Host family: auto, ios, macos, other
family = {}
; Host release used to pick modern or legacy paths: auto, or a version like 10.3
os_version = {}

[profiling]
; Emit signposts (the call-site macros also need the 'profiling' build feature)
signposts = {}
"#,
        config.logging.subsystem,
        config.logging.level,
        path_to_string(&config.logging.directory),
        config.logging.file,
        family,
        os_version,
        config.profiling.signposts,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_contains_sections() {
        let out = to_config_string(&TraceConfig::default());
        assert!(out.contains("[logging]"));
        assert!(out.contains("[platform]"));
        assert!(out.contains("[profiling]"));
        assert!(out.contains("family = auto"));
        assert!(out.contains("os_version = auto"));
        assert!(out.contains("signposts = true"));
    }

    #[test]
    fn test_output_parses_back() {
        let ini = ini::Ini::load_from_str(&to_config_string(&TraceConfig::default())).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();
        assert_eq!(parsed, TraceConfig::default());
    }
}
