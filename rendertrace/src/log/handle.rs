//! Log handles and their one-time initialization.

use std::fmt;
use std::sync::OnceLock;

/// Subsystem used when the configuration does not name one.
pub const DEFAULT_SUBSYSTEM: &str = "org.rendertrace.framework";

/// A log destination: records are tagged with its subsystem and category
/// so host log viewers can filter them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogHandle {
    subsystem: String,
    category: String,
}

impl LogHandle {
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for LogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.subsystem, self.category)
    }
}

/// A [`LogHandle`] created on first use.
///
/// Concurrent first callers race safely: exactly one initialization runs
/// and every caller observes the same handle. The handle is never torn
/// down.
///
/// # Example
///
/// ```
/// use rendertrace::log::LazyLogHandle;
///
/// let log = LazyLogHandle::new("com.example.app", "Collections");
/// assert!(!log.is_initialized());
/// assert_eq!(log.get().category(), "Collections");
/// assert!(log.is_initialized());
/// ```
#[derive(Debug)]
pub struct LazyLogHandle {
    subsystem: String,
    category: &'static str,
    cell: OnceLock<LogHandle>,
}

impl LazyLogHandle {
    pub fn new(subsystem: impl Into<String>, category: &'static str) -> Self {
        Self {
            subsystem: subsystem.into(),
            category,
            cell: OnceLock::new(),
        }
    }

    /// The handle, creating it on the first call.
    pub fn get(&self) -> &LogHandle {
        self.get_or_init_with(|subsystem, category| LogHandle::new(subsystem, category))
    }

    /// The handle, running `init` with the subsystem and category if this
    /// is the first call. Later calls (and losing racers) never run `init`.
    pub fn get_or_init_with<F>(&self, init: F) -> &LogHandle
    where
        F: FnOnce(&str, &str) -> LogHandle,
    {
        self.cell.get_or_init(|| init(&self.subsystem, self.category))
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn category(&self) -> &'static str {
        self.category
    }
}

/// Log categories of the rendering framework itself.
#[derive(Debug)]
pub struct FrameworkLogs {
    /// Layout calculation
    pub layout: LazyLogHandle,
    /// Display and rasterization
    pub render: LazyLogHandle,
    /// Collection and list updates
    pub collections: LazyLogHandle,
}

impl FrameworkLogs {
    pub fn new(subsystem: &str) -> Self {
        Self {
            layout: LazyLogHandle::new(subsystem, "Layout"),
            render: LazyLogHandle::new(subsystem, "Render"),
            collections: LazyLogHandle::new(subsystem, "Collections"),
        }
    }
}

impl Default for FrameworkLogs {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSYSTEM)
    }
}
