//! Tracing library adapter implementation.

use std::fmt::Arguments;

use tracing::span::EnteredSpan;

use super::TraceBackend;
use crate::activity::{ActivityFlags, ActivityToken};
use crate::log::{LogHandle, Severity};
use crate::platform::TracePath;
use crate::signpost::{LegacyTraceCall, SignpostEvent};

/// Backend that delegates to the `tracing` crate.
///
/// Records become events tagged with `subsystem` and `category`, activities
/// become spans, and signposts become TRACE events on the
/// `rendertrace::signpost` target. Whatever subscriber the process
/// installed decides where they end up.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rendertrace::backend::{TraceBackend, TracingBackend};
/// use rendertrace::log::{LogHandle, Severity};
///
/// // Assumes a subscriber is installed; without one records are dropped
/// let backend: Arc<dyn TraceBackend> = Arc::new(TracingBackend::new());
/// let log = LogHandle::new("com.example", "Layout");
/// backend.write_log(&log, Severity::Info, format_args!("measured {} nodes", 12));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    pub fn new() -> Self {
        Self
    }
}

/// An activity backed by an entered span; exiting the span ends it.
struct SpanActivity(EnteredSpan);

impl ActivityToken for SpanActivity {
    fn end(self: Box<Self>) {
        let _span = self.0.exit();
    }
}

/// Stand-in for an activity the host declined to create.
struct SkippedActivity;

impl ActivityToken for SkippedActivity {
    fn end(self: Box<Self>) {}
}

impl TraceBackend for TracingBackend {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn write_log(&self, log: &LogHandle, severity: Severity, args: Arguments<'_>) {
        let subsystem = log.subsystem();
        let category = log.category();
        match severity {
            Severity::Debug => {
                tracing::debug!(target: "rendertrace", subsystem, category, "{}", args)
            }
            Severity::Info | Severity::Default => {
                tracing::info!(target: "rendertrace", subsystem, category, "{}", args)
            }
            Severity::Error => {
                tracing::error!(target: "rendertrace", subsystem, category, "{}", args)
            }
            Severity::Fault => {
                tracing::error!(target: "rendertrace", subsystem, category, fault = true, "{}", args)
            }
        }
    }

    fn begin_activity(
        &self,
        description: &'static str,
        flags: ActivityFlags,
        path: TracePath,
    ) -> Box<dyn ActivityToken> {
        if flags.contains(ActivityFlags::IF_NONE_PRESENT) && !tracing::Span::current().is_none() {
            return Box::new(SkippedActivity);
        }

        let span = match path {
            // Legacy activities are never linked into the caller's context
            TracePath::Legacy => tracing::debug_span!(
                target: "rendertrace",
                parent: None,
                "activity",
                description,
                legacy = true
            ),
            _ if flags.contains(ActivityFlags::DETACHED) => tracing::info_span!(
                target: "rendertrace",
                parent: None,
                "activity",
                description,
                flags = flags.bits()
            ),
            _ => tracing::info_span!(
                target: "rendertrace",
                "activity",
                description,
                flags = flags.bits()
            ),
        };

        Box::new(SpanActivity(span.entered()))
    }

    fn emit_signpost(&self, event: SignpostEvent) {
        tracing::trace!(
            target: "rendertrace::signpost",
            phase = event.phase.as_str(),
            code = event.code,
            object = event.object,
            color = event.color(),
            "signpost"
        );
    }

    fn emit_raw_trace(&self, call: LegacyTraceCall) {
        tracing::trace!(
            target: "rendertrace::signpost",
            debugid = call.debugid,
            phase = call.phase().as_str(),
            object = call.args[0],
            color = call.color(),
            legacy = true,
            "signpost"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingBackend>();
    }

    #[test]
    fn test_tracing_backend_as_trait_object() {
        let backend: Box<dyn TraceBackend> = Box::new(TracingBackend::new());
        let log = LogHandle::new("com.example", "Layout");
        // These go through tracing (may not appear without subscriber)
        backend.write_log(&log, Severity::Debug, format_args!("debug"));
        backend.write_log(&log, Severity::Info, format_args!("info"));
        backend.write_log(&log, Severity::Default, format_args!("default"));
        backend.write_log(&log, Severity::Error, format_args!("error"));
        backend.write_log(&log, Severity::Fault, format_args!("fault"));
        backend.emit_signpost(SignpostEvent::instant(3));
        backend.emit_raw_trace(SignpostEvent::start(3, 1).to_legacy());
    }

    use tracing::Level;
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::Registry;

    /// Name, level and parent name of the current span, if any.
    fn current_span() -> Option<(&'static str, Level, Option<&'static str>)> {
        tracing::dispatcher::get_default(|dispatch| {
            let registry = dispatch
                .downcast_ref::<Registry>()
                .expect("registry should be the default subscriber");
            let id = tracing::Span::current().id()?;
            let span = registry.span(&id).expect("current span should be live");
            Some((
                span.name(),
                *span.metadata().level(),
                span.parent().map(|parent| parent.name()),
            ))
        })
    }

    #[test]
    fn test_activity_spans_nest_under_current() {
        let _subscriber = tracing::subscriber::set_default(Registry::default());
        let backend = TracingBackend::new();
        let outer = tracing::info_span!("outer").entered();

        let token = backend.begin_activity("layout pass", ActivityFlags::DEFAULT, TracePath::Modern);
        assert_eq!(
            current_span(),
            Some(("activity", Level::INFO, Some("outer")))
        );
        token.end();
        assert_eq!(current_span(), Some(("outer", Level::INFO, None)));

        drop(outer);
        assert_eq!(current_span(), None);
    }

    #[test]
    fn test_detached_activity_has_no_parent() {
        let _subscriber = tracing::subscriber::set_default(Registry::default());
        let backend = TracingBackend::new();
        let _outer = tracing::info_span!("outer").entered();

        let token = backend.begin_activity("detached", ActivityFlags::DETACHED, TracePath::Modern);
        assert_eq!(current_span(), Some(("activity", Level::INFO, None)));
        token.end();
        assert_eq!(current_span(), Some(("outer", Level::INFO, None)));
    }

    #[test]
    fn test_legacy_activity_is_unparented_debug_span() {
        let _subscriber = tracing::subscriber::set_default(Registry::default());
        let backend = TracingBackend::new();
        let _outer = tracing::info_span!("outer").entered();

        let token = backend.begin_activity("layout pass", ActivityFlags::DEFAULT, TracePath::Legacy);
        assert_eq!(current_span(), Some(("activity", Level::DEBUG, None)));
        token.end();
        assert_eq!(current_span(), Some(("outer", Level::INFO, None)));
    }

    #[test]
    fn test_if_none_present_skips_when_span_active() {
        let _subscriber = tracing::subscriber::set_default(Registry::default());
        let backend = TracingBackend::new();

        {
            let _outer = tracing::info_span!("outer").entered();
            let token = backend.begin_activity(
                "collection update",
                ActivityFlags::IF_NONE_PRESENT,
                TracePath::Modern,
            );
            assert_eq!(current_span(), Some(("outer", Level::INFO, None)));
            token.end();
            assert_eq!(current_span(), Some(("outer", Level::INFO, None)));
        }

        let token = backend.begin_activity(
            "collection update",
            ActivityFlags::IF_NONE_PRESENT,
            TracePath::Modern,
        );
        assert_eq!(current_span(), Some(("activity", Level::INFO, None)));
        token.end();
        assert_eq!(current_span(), None);
    }

    #[test]
    fn test_name() {
        assert_eq!(TracingBackend.name(), "tracing");
        assert_eq!(format!("{:?}", TracingBackend), "TracingBackend");
    }
}
