//! Tracer trait definition.

use std::fmt::Arguments;

use crate::activity::{ActivityFlags, ActivityScope};
use crate::log::{LogHandle, Severity};

/// Logging and tracing interface for framework internals.
///
/// Every method is total: nothing returns an error, nothing panics, and a
/// facility the host lacks turns the call into a no-op.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single tracer is shared by the
/// layout, render and worker threads.
pub trait Tracer: Send + Sync {
    /// Write a record at `severity` to `log`.
    ///
    /// The convenience methods (`debug`, `info`, `error`, `fault`)
    /// delegate here.
    fn log(&self, log: &LogHandle, severity: Severity, args: Arguments<'_>);

    /// Open an activity that lasts until the returned guard is dropped.
    fn activity_scope(&self, description: &'static str, flags: ActivityFlags) -> ActivityScope;

    /// Write the current backtrace to `log` at `severity`.
    ///
    /// The captured backtrace is leaked. Only call this when debugging or
    /// on a failure path.
    fn log_backtrace(&self, log: &LogHandle, severity: Severity);

    /// Emit an instant signpost.
    fn signpost(&self, code: u32);

    /// Emit the start of a signpost interval identified by `object`.
    fn signpost_start(&self, code: u32, object: usize);

    /// Emit the end of a signpost interval identified by `object`.
    fn signpost_end(&self, code: u32, object: usize);

    /// Name of the implementation, for diagnostics.
    fn name(&self) -> &'static str;

    fn debug(&self, log: &LogHandle, args: Arguments<'_>) {
        self.log(log, Severity::Debug, args);
    }

    fn info(&self, log: &LogHandle, args: Arguments<'_>) {
        self.log(log, Severity::Info, args);
    }

    fn error(&self, log: &LogHandle, args: Arguments<'_>) {
        self.log(log, Severity::Error, args);
    }

    fn fault(&self, log: &LogHandle, args: Arguments<'_>) {
        self.log(log, Severity::Fault, args);
    }
}
