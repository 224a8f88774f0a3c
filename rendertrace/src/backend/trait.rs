//! Backend trait definition.

use std::fmt::Arguments;

use crate::activity::{ActivityFlags, ActivityToken};
use crate::log::{LogHandle, Severity};
use crate::platform::TracePath;
use crate::signpost::{LegacyTraceCall, SignpostEvent};

/// A host logging and tracing facility.
///
/// Implementations must never panic or block on the caller: instrumentation
/// is best-effort and must not disturb the framework calling it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one backend serves every thread.
pub trait TraceBackend: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Write one structured record.
    fn write_log(&self, log: &LogHandle, severity: Severity, args: Arguments<'_>);

    /// Open an activity on `path` (`Modern` or `Legacy`).
    fn begin_activity(
        &self,
        description: &'static str,
        flags: ActivityFlags,
        path: TracePath,
    ) -> Box<dyn ActivityToken>;

    /// Emit a signpost through the modern signpost API.
    fn emit_signpost(&self, event: SignpostEvent);

    /// Emit a raw kernel trace call (legacy signpost path).
    fn emit_raw_trace(&self, call: LegacyTraceCall);
}
