//! Host facilities a tracer forwards to.
//!
//! The [`TraceBackend`] trait is the seam between the tracer, which decides
//! *which* path a call takes, and the host, which actually records it.
//!
//! # Implementations
//!
//! - [`TracingBackend`]: structured records and spans through the `tracing` crate
//! - `KdebugBackend` (macOS/iOS only): kernel signposts, logs via `tracing`
//! - [`RecordingBackend`]: keeps every call in memory for assertions

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod kdebug;
mod recording;
mod tracing_adapter;
mod r#trait;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub use kdebug::KdebugBackend;
pub use r#trait::TraceBackend;
pub use recording::{BackendEvent, RecordingBackend};
pub use tracing_adapter::TracingBackend;

use std::sync::Arc;

/// The backend for the compilation target.
///
/// Apple targets send signposts to the kernel; every other target records
/// everything through `tracing`.
pub fn default_backend() -> Arc<dyn TraceBackend> {
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        Arc::new(KdebugBackend::new())
    }

    #[cfg(not(any(target_os = "macos", target_os = "ios")))]
    {
        Arc::new(TracingBackend::new())
    }
}
