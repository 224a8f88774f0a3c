//! Log destinations and severities.
//!
//! - [`Severity`]: record severity, mapped onto the host's log types
//! - [`LogHandle`]: a subsystem/category pair records are written to
//! - [`LazyLogHandle`]: a handle created at most once, on first use
//! - [`FrameworkLogs`]: the framework's own categories

mod handle;
mod severity;

pub use handle::{FrameworkLogs, LazyLogHandle, LogHandle, DEFAULT_SUBSYSTEM};
pub use severity::Severity;
