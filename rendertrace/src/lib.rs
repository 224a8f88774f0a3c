//! rendertrace - logging, activity tracing and profiling signposts for a UI
//! rendering framework's internals.
//!
//! Framework code instruments itself through a [`Tracer`](tracer::Tracer).
//! The tracer is chosen once at startup from what the host actually offers:
//! modern unified logging and signposts, legacy compatibility paths on older
//! releases, or nothing at all. Every call is best-effort and never fails.
//!
//! # Example
//!
//! ```
//! use rendertrace::config::TraceConfig;
//! use rendertrace::instrumentation::Instrumentation;
//! use rendertrace::{activity_scope, log_info, profiling_signpost_end, profiling_signpost_start};
//!
//! let inst = Instrumentation::from_config(&TraceConfig::default());
//! let tracer = inst.tracer();
//!
//! activity_scope!(tracer, "Collection update");
//! profiling_signpost_start!(tracer, 12, 0x1);
//! log_info!(tracer, inst.logs().collections.get(), "applied {} changes", 4);
//! profiling_signpost_end!(tracer, 12, 0x1);
//! ```

#[macro_use]
mod macros;

pub mod activity;
pub mod backend;
pub mod config;
pub mod instrumentation;
pub mod log;
pub mod logging;
pub mod panic;
pub mod platform;
pub mod signpost;
pub mod tracer;

/// Version of the rendertrace library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
