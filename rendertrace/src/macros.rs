//! Call-site macros.
//!
//! These are what framework code writes at its instrumentation points.
//! Each takes the tracer first (anything that derefs to a [`Tracer`],
//! e.g. `&dyn Tracer`, `Arc<dyn Tracer>` or a concrete tracer).
//!
//! The `profiling_signpost*` macros compile to nothing unless the
//! `profiling` feature is enabled; their arguments are not even evaluated.
//!
//! [`Tracer`]: crate::tracer::Tracer

/// Write a debug record: `log_debug!(tracer, log, "fmt", args...)`.
#[macro_export]
macro_rules! log_debug {
    ($tracer:expr, $log:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.debug($log, format_args!($($arg)+))
    }};
}

/// Write an info record: `log_info!(tracer, log, "fmt", args...)`.
#[macro_export]
macro_rules! log_info {
    ($tracer:expr, $log:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.info($log, format_args!($($arg)+))
    }};
}

/// Write an error record: `log_error!(tracer, log, "fmt", args...)`.
#[macro_export]
macro_rules! log_error {
    ($tracer:expr, $log:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.error($log, format_args!($($arg)+))
    }};
}

/// Write a fault record: `log_fault!(tracer, log, "fmt", args...)`.
#[macro_export]
macro_rules! log_fault {
    ($tracer:expr, $log:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.fault($log, format_args!($($arg)+))
    }};
}

/// Keep an activity open until the end of the enclosing block.
///
/// ```
/// use rendertrace::activity::ActivityFlags;
/// use rendertrace::tracer::NullTracer;
///
/// fn measure(tracer: &NullTracer) {
///     rendertrace::activity_scope!(tracer, "Measure");
///     rendertrace::activity_scope!(tracer, "Detached work", ActivityFlags::DETACHED);
///     // both activities end here
/// }
/// measure(&NullTracer);
/// ```
#[macro_export]
macro_rules! activity_scope {
    ($tracer:expr, $description:expr) => {
        $crate::activity_scope!($tracer, $description, $crate::activity::ActivityFlags::DEFAULT)
    };
    ($tracer:expr, $description:expr, $flags:expr) => {
        let _activity_scope = {
            #[allow(unused_imports)]
            use $crate::tracer::Tracer as _;
            $tracer.activity_scope($description, $flags)
        };
    };
}

/// Write the current backtrace: `log_backtrace!(tracer, log, severity)`.
///
/// The backtrace is leaked; use only when debugging or on failure paths.
#[macro_export]
macro_rules! log_backtrace {
    ($tracer:expr, $log:expr, $severity:expr) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.log_backtrace($log, $severity)
    }};
}

/// Emit an instant signpost: `profiling_signpost!(tracer, code)`.
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profiling_signpost {
    ($tracer:expr, $code:expr) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.signpost($code)
    }};
}

/// Emit an instant signpost (no-op without the `profiling` feature).
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profiling_signpost {
    ($tracer:expr, $code:expr) => {
        ()
    };
}

/// Start a signpost interval: `profiling_signpost_start!(tracer, code, object)`.
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profiling_signpost_start {
    ($tracer:expr, $code:expr, $object:expr) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.signpost_start($code, $object)
    }};
}

/// Start a signpost interval (no-op without the `profiling` feature).
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profiling_signpost_start {
    ($tracer:expr, $code:expr, $object:expr) => {
        ()
    };
}

/// End a signpost interval: `profiling_signpost_end!(tracer, code, object)`.
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profiling_signpost_end {
    ($tracer:expr, $code:expr, $object:expr) => {{
        #[allow(unused_imports)]
        use $crate::tracer::Tracer as _;
        $tracer.signpost_end($code, $object)
    }};
}

/// End a signpost interval (no-op without the `profiling` feature).
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profiling_signpost_end {
    ($tracer:expr, $code:expr, $object:expr) => {
        ()
    };
}
