//! No-operation tracer implementation.

use std::fmt::Arguments;

use super::Tracer;
use crate::activity::{ActivityFlags, ActivityScope};
use crate::log::{LogHandle, Severity};

/// A tracer that discards everything.
///
/// Used when the host has none of the facilities, when instrumentation is
/// switched off, and in tests and benchmarks where output is noise.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rendertrace::log::LogHandle;
/// use rendertrace::tracer::{NullTracer, Tracer};
///
/// let tracer: Arc<dyn Tracer> = Arc::new(NullTracer);
/// let log = LogHandle::new("com.example", "Render");
/// tracer.info(&log, format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {
    #[inline]
    fn log(&self, _log: &LogHandle, _severity: Severity, _args: Arguments<'_>) {}

    #[inline]
    fn activity_scope(&self, _description: &'static str, _flags: ActivityFlags) -> ActivityScope {
        ActivityScope::inert()
    }

    #[inline]
    fn log_backtrace(&self, _log: &LogHandle, _severity: Severity) {}

    #[inline]
    fn signpost(&self, _code: u32) {}

    #[inline]
    fn signpost_start(&self, _code: u32, _object: usize) {}

    #[inline]
    fn signpost_end(&self, _code: u32, _object: usize) {}

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tracer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NullTracer>();
    }

    #[test]
    fn test_null_tracer_as_trait_object() {
        let tracer: Box<dyn Tracer> = Box::new(NullTracer);
        let log = LogHandle::new("com.example", "Layout");
        tracer.debug(&log, format_args!("debug message"));
        tracer.info(&log, format_args!("info message"));
        tracer.error(&log, format_args!("error message"));
        tracer.fault(&log, format_args!("fault message"));
        tracer.log_backtrace(&log, Severity::Error);
        tracer.signpost(1);
        tracer.signpost_start(1, 2);
        tracer.signpost_end(1, 2);
    }

    #[test]
    fn test_null_tracer_scope_is_inert() {
        let scope = NullTracer.activity_scope("nothing", ActivityFlags::DEFAULT);
        assert!(!scope.is_active());
    }

    #[test]
    fn test_null_tracer_debug_impl() {
        assert_eq!(format!("{:?}", NullTracer), "NullTracer");
        assert_eq!(NullTracer.name(), "null");
    }
}
