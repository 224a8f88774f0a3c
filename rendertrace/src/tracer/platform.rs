//! Capability-driven tracer implementation.

use std::backtrace::Backtrace;
use std::fmt::{self, Arguments};
use std::sync::Arc;

use super::Tracer;
use crate::activity::{ActivityFlags, ActivityScope};
use crate::backend::TraceBackend;
use crate::log::{LogHandle, Severity};
use crate::platform::{Capabilities, TracePath};
use crate::signpost::SignpostEvent;

/// Tracer that forwards to a backend along the paths resolved for the host.
///
/// Paths are fixed at construction; no call re-checks the OS version.
pub struct PlatformTracer {
    capabilities: Capabilities,
    backend: Arc<dyn TraceBackend>,
}

impl PlatformTracer {
    pub fn new(capabilities: Capabilities, backend: Arc<dyn TraceBackend>) -> Self {
        Self {
            capabilities,
            backend,
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn emit(&self, event: SignpostEvent) {
        match self.capabilities.signposts() {
            TracePath::Modern => self.backend.emit_signpost(event),
            TracePath::Legacy => self.backend.emit_raw_trace(event.to_legacy()),
            TracePath::Unavailable => {}
        }
    }
}

impl fmt::Debug for PlatformTracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformTracer")
            .field("capabilities", &self.capabilities)
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl Tracer for PlatformTracer {
    fn log(&self, log: &LogHandle, severity: Severity, args: Arguments<'_>) {
        if self.capabilities.logs().is_available() {
            self.backend.write_log(log, severity, args);
        }
    }

    fn activity_scope(&self, description: &'static str, flags: ActivityFlags) -> ActivityScope {
        match self.capabilities.activities() {
            TracePath::Unavailable => ActivityScope::inert(),
            path => ActivityScope::open(self.backend.begin_activity(description, flags, path)),
        }
    }

    fn log_backtrace(&self, log: &LogHandle, severity: Severity) {
        if !self.capabilities.backtraces() {
            return;
        }
        let backtrace: &'static Backtrace = Box::leak(Box::new(Backtrace::force_capture()));
        self.backend.write_log(
            log,
            severity,
            format_args!("backtrace: {:p}\n{}", backtrace, backtrace),
        );
    }

    fn signpost(&self, code: u32) {
        self.emit(SignpostEvent::instant(code));
    }

    fn signpost_start(&self, code: u32, object: usize) {
        self.emit(SignpostEvent::start(code, object));
    }

    fn signpost_end(&self, code: u32, object: usize) {
        self.emit(SignpostEvent::end(code, object));
    }

    fn name(&self) -> &'static str {
        "platform"
    }
}
