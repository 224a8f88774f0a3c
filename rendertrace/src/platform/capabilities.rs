//! Per-facility code path resolution.
//!
//! Resolution happens once, when the tracer is built. Call sites never
//! check the OS version themselves.

use std::fmt;

use super::detect::Platform;
use super::version::{OsFamily, OsVersion};

/// Which implementation a facility uses on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TracePath {
    /// Current OS API (unified logging, activity objects, `kdebug_signpost`)
    Modern,
    /// Compatibility API for older releases (`os_activity_start`, raw `kdebug_trace`)
    Legacy,
    /// Facility missing; calls are no-ops
    Unavailable,
}

impl TracePath {
    pub fn is_available(&self) -> bool {
        !matches!(self, TracePath::Unavailable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TracePath::Modern => "modern",
            TracePath::Legacy => "legacy",
            TracePath::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for TracePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum releases at which each facility appeared on an Apple family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacilityMinimums {
    /// Structured logging and the start/end activity API
    pub logging: OsVersion,
    /// Activity objects, scoped activities and `kdebug_signpost`
    pub modern: OsVersion,
}

impl FacilityMinimums {
    /// Minimums for an Apple family, `None` for other hosts.
    pub fn for_family(family: OsFamily) -> Option<Self> {
        match family {
            OsFamily::Ios => Some(Self {
                logging: OsVersion::new(9, 0, 0),
                modern: OsVersion::new(10, 0, 0),
            }),
            OsFamily::MacOs => Some(Self {
                logging: OsVersion::new(10, 11, 0),
                modern: OsVersion::new(10, 12, 0),
            }),
            OsFamily::Other => None,
        }
    }
}

/// Resolved code path for every facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    platform: Platform,
    logs: TracePath,
    activities: TracePath,
    signposts: TracePath,
}

impl Capabilities {
    /// Resolve the code path for every facility on `platform`.
    ///
    /// `profiling` is whether signposts are wanted at all; when false the
    /// signpost path is [`TracePath::Unavailable`] regardless of the host.
    pub fn resolve(platform: &Platform, profiling: bool) -> Self {
        let minimums = FacilityMinimums::for_family(platform.family);
        let (logs, activities, kernel_signposts) = match minimums {
            // Non-Apple hosts log through the structured subscriber and
            // have no kernel trace facility.
            None => (TracePath::Modern, TracePath::Modern, TracePath::Unavailable),
            Some(min) => match platform.version {
                // The raw trace syscall predates every known release.
                None => (
                    TracePath::Unavailable,
                    TracePath::Unavailable,
                    TracePath::Legacy,
                ),
                Some(v) if v.at_least(min.modern) => {
                    (TracePath::Modern, TracePath::Modern, TracePath::Modern)
                }
                Some(v) if v.at_least(min.logging) => {
                    (TracePath::Modern, TracePath::Legacy, TracePath::Legacy)
                }
                Some(_) => (
                    TracePath::Unavailable,
                    TracePath::Unavailable,
                    TracePath::Legacy,
                ),
            },
        };

        let signposts = if profiling {
            kernel_signposts
        } else {
            TracePath::Unavailable
        };

        Self {
            platform: *platform,
            logs,
            activities,
            signposts,
        }
    }

    /// Every facility unavailable.
    pub fn none(platform: &Platform) -> Self {
        Self {
            platform: *platform,
            logs: TracePath::Unavailable,
            activities: TracePath::Unavailable,
            signposts: TracePath::Unavailable,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn logs(&self) -> TracePath {
        self.logs
    }

    pub fn activities(&self) -> TracePath {
        self.activities
    }

    pub fn signposts(&self) -> TracePath {
        self.signposts
    }

    /// Backtrace records ride on the modern logging API only.
    pub fn backtraces(&self) -> bool {
        self.logs == TracePath::Modern && self.activities == TracePath::Modern
    }

    /// True when no facility is available.
    pub fn is_inert(&self) -> bool {
        !self.logs.is_available()
            && !self.activities.is_available()
            && !self.signposts.is_available()
    }
}
