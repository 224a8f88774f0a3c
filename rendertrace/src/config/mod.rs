//! Configuration file handling for `~/.rendertrace/config.ini`.
//!
//! - [`TraceConfig`]: every setting, with defaults
//! - `parser`: INI → `TraceConfig`
//! - `writer`: `TraceConfig` → commented INI
//!
//! # Example
//!
//! ```
//! use rendertrace::config::TraceConfig;
//!
//! let config = TraceConfig::default();
//! assert_eq!(config.logging.subsystem, "org.rendertrace.framework");
//! assert!(config.profiling.signposts);
//! ```

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigError};
pub use settings::{
    LoggingSettings, PlatformSettings, ProfilingSettings, TraceConfig, DEFAULT_LOG_DIR,
    DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
};
