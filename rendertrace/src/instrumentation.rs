//! Process-wide instrumentation state.
//!
//! [`Instrumentation`] is built once at startup and handed to framework
//! components by reference (or `Arc`). There is no global lookup: whoever
//! constructs it decides its lifetime, and in practice it lives until the
//! process exits.

use std::sync::Arc;

use crate::backend::{default_backend, TraceBackend};
use crate::config::TraceConfig;
use crate::log::FrameworkLogs;
use crate::platform::{Capabilities, Platform};
use crate::tracer::{select_tracer, NullTracer, Tracer};

/// The chosen tracer plus the framework's log categories.
pub struct Instrumentation {
    tracer: Arc<dyn Tracer>,
    logs: FrameworkLogs,
    capabilities: Capabilities,
}

impl Instrumentation {
    /// Build from configuration: resolve the platform, pick the default
    /// backend for the target, and select the tracer.
    pub fn from_config(config: &TraceConfig) -> Self {
        Self::with_backend(config, config.platform.resolve(), default_backend())
    }

    /// Build with an explicit platform and backend.
    pub fn with_backend(
        config: &TraceConfig,
        platform: Platform,
        backend: Arc<dyn TraceBackend>,
    ) -> Self {
        let capabilities = Capabilities::resolve(&platform, config.profiling.signposts);
        let tracer = select_tracer(capabilities, backend);
        Self {
            tracer,
            logs: FrameworkLogs::new(&config.logging.subsystem),
            capabilities,
        }
    }

    /// Instrumentation that records nothing.
    pub fn disabled() -> Self {
        let platform = Platform::new(crate::platform::OsFamily::current(), None);
        Self {
            tracer: Arc::new(NullTracer),
            logs: FrameworkLogs::default(),
            capabilities: Capabilities::none(&platform),
        }
    }

    pub fn tracer(&self) -> &dyn Tracer {
        self.tracer.as_ref()
    }

    /// Shared handle to the tracer for components that outlive a borrow.
    pub fn shared_tracer(&self) -> Arc<dyn Tracer> {
        Arc::clone(&self.tracer)
    }

    pub fn logs(&self) -> &FrameworkLogs {
        &self.logs
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

impl std::fmt::Debug for Instrumentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instrumentation")
            .field("tracer", &self.tracer.name())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}
