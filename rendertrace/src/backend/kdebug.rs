//! Kernel signpost backend for macOS and iOS.

use std::fmt::Arguments;
use std::sync::OnceLock;

use super::{TraceBackend, TracingBackend};
use crate::activity::{ActivityFlags, ActivityToken};
use crate::log::{LogHandle, Severity};
use crate::platform::TracePath;
use crate::signpost::{LegacyTraceCall, SignpostEvent, SignpostPhase, SYS_KDEBUG_TRACE};

type SignpostFn = unsafe extern "C" fn(u32, usize, usize, usize, usize) -> libc::c_int;

/// `kdebug_signpost*` entry points, if the running libSystem exports them.
#[derive(Clone, Copy)]
struct SignpostFns {
    instant: SignpostFn,
    start: SignpostFn,
    end: SignpostFn,
}

static SIGNPOST_FNS: OnceLock<Option<SignpostFns>> = OnceLock::new();

fn lookup(name: &std::ffi::CStr) -> Option<SignpostFn> {
    // SAFETY: `name` is NUL-terminated and RTLD_DEFAULT searches the
    // already-loaded images; no library is opened or closed.
    let sym = unsafe { libc::dlsym(libc::RTLD_DEFAULT, name.as_ptr()) };
    if sym.is_null() {
        return None;
    }
    // SAFETY: the kdebug_signpost family is declared in <sys/kdebug_signpost.h>
    // as `int f(uint32_t, uintptr_t, uintptr_t, uintptr_t, uintptr_t)`.
    Some(unsafe { std::mem::transmute::<*mut libc::c_void, SignpostFn>(sym) })
}

fn signpost_fns() -> Option<SignpostFns> {
    *SIGNPOST_FNS.get_or_init(|| {
        let fns = SignpostFns {
            instant: lookup(c"kdebug_signpost")?,
            start: lookup(c"kdebug_signpost_start")?,
            end: lookup(c"kdebug_signpost_end")?,
        };
        Some(fns)
    })
}

/// Backend that emits signposts as kernel trace markers.
///
/// Logs and activities go through [`TracingBackend`]. Signposts on the
/// modern path call `kdebug_signpost*`, resolved at runtime so the binary
/// still loads on releases without them; if resolution fails the call
/// degrades to the raw `kdebug_trace` syscall.
#[derive(Debug, Clone, Copy, Default)]
pub struct KdebugBackend {
    logs: TracingBackend,
}

impl KdebugBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceBackend for KdebugBackend {
    fn name(&self) -> &'static str {
        "kdebug"
    }

    fn write_log(&self, log: &LogHandle, severity: Severity, args: Arguments<'_>) {
        self.logs.write_log(log, severity, args);
    }

    fn begin_activity(
        &self,
        description: &'static str,
        flags: ActivityFlags,
        path: TracePath,
    ) -> Box<dyn ActivityToken> {
        self.logs.begin_activity(description, flags, path)
    }

    fn emit_signpost(&self, event: SignpostEvent) {
        let Some(fns) = signpost_fns() else {
            self.emit_raw_trace(event.to_legacy());
            return;
        };
        let f = match event.phase {
            SignpostPhase::Instant => fns.instant,
            SignpostPhase::Start => fns.start,
            SignpostPhase::End => fns.end,
        };
        let [a1, a2, a3, a4] = event.modern_args();
        // SAFETY: `f` was resolved from libSystem with the matching
        // signature; the call only records a trace point.
        let _ = unsafe { f(event.code, a1, a2, a3, a4) };
    }

    #[allow(deprecated)]
    fn emit_raw_trace(&self, call: LegacyTraceCall) {
        let [a1, a2, a3, a4] = call.args;
        // SAFETY: kdebug_trace takes a 32-bit id and four word-sized
        // arguments and has no memory effects visible to the caller.
        let _ = unsafe { libc::syscall(SYS_KDEBUG_TRACE, call.debugid, a1, a2, a3, a4) };
    }
}
