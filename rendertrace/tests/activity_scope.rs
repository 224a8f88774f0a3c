//! Activity scopes close exactly once on every exit path.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rendertrace::activity::ActivityFlags;
use rendertrace::activity_scope;
use rendertrace::backend::{BackendEvent, RecordingBackend};
use rendertrace::platform::{Capabilities, OsFamily, OsVersion, Platform, TracePath};
use rendertrace::tracer::{PlatformTracer, Tracer};

fn tracer(version: OsVersion) -> (Arc<dyn Tracer>, RecordingBackend) {
    let recording = RecordingBackend::new();
    let platform = Platform::new(OsFamily::Ios, Some(version));
    let tracer = PlatformTracer::new(
        Capabilities::resolve(&platform, true),
        Arc::new(recording.clone()),
    );
    (Arc::new(tracer), recording)
}

fn modern() -> (Arc<dyn Tracer>, RecordingBackend) {
    tracer(OsVersion::new(10, 0, 0))
}

fn find_first(tracer: &dyn Tracer, items: &[u32], wanted: u32) -> Option<usize> {
    activity_scope!(tracer, "Search");
    for (i, item) in items.iter().enumerate() {
        if *item == wanted {
            return Some(i);
        }
    }
    None
}

#[test]
fn test_early_return_closes_once() {
    let (tracer, recording) = modern();

    assert_eq!(find_first(tracer.as_ref(), &[1, 2, 3], 2), Some(1));
    assert_eq!(recording.activity_counts(), (1, 1));

    assert_eq!(find_first(tracer.as_ref(), &[1, 2, 3], 9), None);
    assert_eq!(recording.activity_counts(), (2, 2));
}

#[test]
fn test_unwind_closes_once() {
    let (tracer, recording) = modern();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        activity_scope!(tracer, "Doomed layout");
        panic!("layout failed");
    }));

    assert!(result.is_err());
    assert_eq!(recording.activity_counts(), (1, 1));
}

#[test]
fn test_sibling_scopes_are_independent() {
    let (tracer, recording) = modern();

    {
        activity_scope!(tracer, "First");
    }
    {
        activity_scope!(tracer, "Second", ActivityFlags::DETACHED);
    }

    let events = recording.events();
    assert_eq!(events.len(), 4);
    match (&events[0], &events[1], &events[2], &events[3]) {
        (
            BackendEvent::ActivityBegin {
                id: a,
                description: "First",
                ..
            },
            BackendEvent::ActivityEnd { id: a_end },
            BackendEvent::ActivityBegin {
                id: b,
                description: "Second",
                flags,
                ..
            },
            BackendEvent::ActivityEnd { id: b_end },
        ) => {
            assert_eq!(a, a_end);
            assert_eq!(b, b_end);
            assert_ne!(a, b);
            assert_eq!(*flags, ActivityFlags::DETACHED);
        }
        other => panic!("unexpected events: {:?}", other),
    }
}

#[test]
fn test_explicit_end_then_scope_exit() {
    let (tracer, recording) = modern();
    {
        let scope = tracer.activity_scope("Manual", ActivityFlags::DEFAULT);
        scope.end();
        assert_eq!(recording.activity_counts(), (1, 1));
    }
    assert_eq!(recording.activity_counts(), (1, 1));
}

#[test]
fn test_legacy_release_uses_legacy_activities() {
    let (tracer, recording) = tracer(OsVersion::new(9, 0, 0));
    {
        activity_scope!(tracer, "Old device");
    }
    assert!(matches!(
        recording.events()[0],
        BackendEvent::ActivityBegin {
            path: TracePath::Legacy,
            ..
        }
    ));
    assert_eq!(recording.activity_counts(), (1, 1));
}

#[test]
fn test_unavailable_release_has_no_activity() {
    let (tracer, recording) = tracer(OsVersion::new(8, 0, 0));
    let early = |t: &dyn Tracer| -> bool {
        activity_scope!(t, "Nothing");
        true
    };
    assert!(early(tracer.as_ref()));
    assert_eq!(recording.activity_counts(), (0, 0));
}
