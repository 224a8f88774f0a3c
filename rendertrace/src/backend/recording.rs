//! In-memory backend for asserting on instrumentation.

use std::fmt::Arguments;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::TraceBackend;
use crate::activity::{ActivityFlags, ActivityToken};
use crate::log::{LogHandle, Severity};
use crate::platform::TracePath;
use crate::signpost::{LegacyTraceCall, SignpostEvent};

/// One call received by a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    Log {
        log: LogHandle,
        severity: Severity,
        message: String,
    },
    ActivityBegin {
        id: u64,
        description: &'static str,
        flags: ActivityFlags,
        path: TracePath,
    },
    ActivityEnd {
        id: u64,
    },
    Signpost(SignpostEvent),
    RawTrace(LegacyTraceCall),
}

/// Backend that records every call instead of forwarding it.
///
/// Clones share the same recording, so a test can keep one clone and hand
/// another to the tracer.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rendertrace::backend::{BackendEvent, RecordingBackend, TraceBackend};
/// use rendertrace::signpost::SignpostEvent;
///
/// let recording = RecordingBackend::new();
/// let backend: Arc<dyn TraceBackend> = Arc::new(recording.clone());
/// backend.emit_signpost(SignpostEvent::instant(4));
///
/// assert_eq!(
///     recording.events(),
///     vec![BackendEvent::Signpost(SignpostEvent::instant(4))]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    events: Arc<Mutex<Vec<BackendEvent>>>,
    next_activity: Arc<AtomicU64>,
}

struct RecordedActivity {
    id: u64,
    events: Arc<Mutex<Vec<BackendEvent>>>,
}

impl ActivityToken for RecordedActivity {
    fn end(self: Box<Self>) {
        push(&self.events, BackendEvent::ActivityEnd { id: self.id });
    }
}

// A panicking test thread must not hide what was recorded before it.
fn lock(events: &Mutex<Vec<BackendEvent>>) -> MutexGuard<'_, Vec<BackendEvent>> {
    events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn push(events: &Mutex<Vec<BackendEvent>>, event: BackendEvent) {
    lock(events).push(event);
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call so far, in order.
    pub fn events(&self) -> Vec<BackendEvent> {
        lock(&self.events).clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        lock(&self.events).clear();
    }

    /// Recorded log records as `(severity, message)`.
    pub fn logs(&self) -> Vec<(Severity, String)> {
        lock(&self.events)
            .iter()
            .filter_map(|e| match e {
                BackendEvent::Log {
                    severity, message, ..
                } => Some((*severity, message.clone())),
                _ => None,
            })
            .collect()
    }

    /// Signposts from the modern path.
    pub fn signposts(&self) -> Vec<SignpostEvent> {
        lock(&self.events)
            .iter()
            .filter_map(|e| match e {
                BackendEvent::Signpost(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// Raw trace calls from the legacy path.
    pub fn raw_traces(&self) -> Vec<LegacyTraceCall> {
        lock(&self.events)
            .iter()
            .filter_map(|e| match e {
                BackendEvent::RawTrace(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Number of activities begun and ended so far.
    pub fn activity_counts(&self) -> (usize, usize) {
        let events = lock(&self.events);
        let begun = events
            .iter()
            .filter(|e| matches!(e, BackendEvent::ActivityBegin { .. }))
            .count();
        let ended = events
            .iter()
            .filter(|e| matches!(e, BackendEvent::ActivityEnd { .. }))
            .count();
        (begun, ended)
    }
}

impl TraceBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn write_log(&self, log: &LogHandle, severity: Severity, args: Arguments<'_>) {
        push(
            &self.events,
            BackendEvent::Log {
                log: log.clone(),
                severity,
                message: args.to_string(),
            },
        );
    }

    fn begin_activity(
        &self,
        description: &'static str,
        flags: ActivityFlags,
        path: TracePath,
    ) -> Box<dyn ActivityToken> {
        let id = self.next_activity.fetch_add(1, Ordering::Relaxed);
        push(
            &self.events,
            BackendEvent::ActivityBegin {
                id,
                description,
                flags,
                path,
            },
        );
        Box::new(RecordedActivity {
            id,
            events: Arc::clone(&self.events),
        })
    }

    fn emit_signpost(&self, event: SignpostEvent) {
        push(&self.events, BackendEvent::Signpost(event));
    }

    fn emit_raw_trace(&self, call: LegacyTraceCall) {
        push(&self.events, BackendEvent::RawTrace(call));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_logs_with_formatted_message() {
        let backend = RecordingBackend::new();
        let log = LogHandle::new("com.example", "Layout");
        backend.write_log(&log, Severity::Error, format_args!("node {} failed", 3));

        assert_eq!(
            backend.events(),
            vec![BackendEvent::Log {
                log,
                severity: Severity::Error,
                message: "node 3 failed".to_string(),
            }]
        );
        assert_eq!(
            backend.logs(),
            vec![(Severity::Error, "node 3 failed".to_string())]
        );
    }

    #[test]
    fn test_activity_ids_are_distinct() {
        let backend = RecordingBackend::new();
        let a = backend.begin_activity("a", ActivityFlags::DEFAULT, TracePath::Modern);
        let b = backend.begin_activity("b", ActivityFlags::DEFAULT, TracePath::Modern);
        b.end();
        a.end();

        let events = backend.events();
        assert_eq!(
            events[2..],
            [
                BackendEvent::ActivityEnd { id: 1 },
                BackendEvent::ActivityEnd { id: 0 }
            ]
        );
        assert_eq!(backend.activity_counts(), (2, 2));
    }

    #[test]
    fn test_clones_share_recording() {
        let backend = RecordingBackend::new();
        let clone = backend.clone();
        clone.emit_signpost(SignpostEvent::instant(1));
        clone.emit_raw_trace(SignpostEvent::instant(1).to_legacy());

        assert_eq!(backend.signposts().len(), 1);
        assert_eq!(backend.raw_traces().len(), 1);

        backend.clear();
        assert!(clone.events().is_empty());
    }
}
