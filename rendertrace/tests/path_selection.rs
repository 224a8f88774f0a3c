//! Path selection is total and deterministic for a fixed platform.

use std::sync::Arc;
use std::thread;

use rendertrace::backend::RecordingBackend;
use rendertrace::config::TraceConfig;
use rendertrace::instrumentation::Instrumentation;
use rendertrace::platform::{Capabilities, OsFamily, OsVersion, Platform, TracePath};

fn all_platforms() -> Vec<Platform> {
    let mut platforms = vec![
        Platform::new(OsFamily::Other, None),
        Platform::new(OsFamily::Ios, None),
        Platform::new(OsFamily::MacOs, None),
    ];
    for major in 7..=18 {
        for minor in 0..=3 {
            platforms.push(Platform::new(
                OsFamily::Ios,
                Some(OsVersion::new(major, minor, 0)),
            ));
        }
    }
    for minor in 8..=15 {
        platforms.push(Platform::new(
            OsFamily::MacOs,
            Some(OsVersion::new(10, minor, 0)),
        ));
    }
    for major in 11..=15 {
        platforms.push(Platform::new(
            OsFamily::MacOs,
            Some(OsVersion::new(major, 0, 0)),
        ));
    }
    platforms
}

#[test]
fn test_resolution_is_deterministic() {
    for platform in all_platforms() {
        for profiling in [true, false] {
            let first = Capabilities::resolve(&platform, profiling);
            for _ in 0..3 {
                assert_eq!(Capabilities::resolve(&platform, profiling), first);
            }
        }
    }
}

#[test]
fn test_resolution_agrees_across_threads() {
    let platforms = all_platforms();
    let expected: Vec<_> = platforms
        .iter()
        .map(|p| Capabilities::resolve(p, true))
        .collect();

    let results: Vec<Vec<Capabilities>> = thread::scope(|s| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let platforms = &platforms;
                s.spawn(move || {
                    platforms
                        .iter()
                        .map(|p| Capabilities::resolve(p, true))
                        .collect()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn test_paths_are_monotonic_in_version() {
    fn rank(path: TracePath) -> u8 {
        match path {
            TracePath::Unavailable => 0,
            TracePath::Legacy => 1,
            TracePath::Modern => 2,
        }
    }

    let mut previous: Option<Capabilities> = None;
    for major in 7..=18 {
        let platform = Platform::new(OsFamily::Ios, Some(OsVersion::new(major, 0, 0)));
        let caps = Capabilities::resolve(&platform, true);
        if let Some(prev) = previous {
            assert!(rank(caps.logs()) >= rank(prev.logs()));
            assert!(rank(caps.activities()) >= rank(prev.activities()));
            assert!(rank(caps.signposts()) >= rank(prev.signposts()));
        }
        previous = Some(caps);
    }
}

#[test]
fn test_configured_override_drives_instrumentation() {
    let mut config = TraceConfig::default();
    config.platform.family = Some(OsFamily::Ios);
    config.platform.os_version = Some(OsVersion::new(9, 3, 0));

    let inst = Instrumentation::with_backend(
        &config,
        config.platform.resolve(),
        Arc::new(RecordingBackend::new()),
    );

    assert_eq!(inst.capabilities().logs(), TracePath::Modern);
    assert_eq!(inst.capabilities().activities(), TracePath::Legacy);
    assert_eq!(inst.capabilities().signposts(), TracePath::Legacy);
}
