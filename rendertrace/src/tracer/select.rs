//! Tracer selection from resolved capabilities.

use std::sync::Arc;

use super::{NullTracer, PlatformTracer, Tracer};
use crate::backend::TraceBackend;
use crate::platform::Capabilities;

/// Pick the tracer implementation for `capabilities`.
///
/// A host with no facility at all gets a [`NullTracer`]; anything else gets
/// a [`PlatformTracer`] over `backend`.
pub fn select_tracer(capabilities: Capabilities, backend: Arc<dyn TraceBackend>) -> Arc<dyn Tracer> {
    if capabilities.is_inert() {
        tracing::debug!(platform = %capabilities.platform(), "No tracing facilities, using null tracer");
        return Arc::new(NullTracer);
    }

    tracing::debug!(
        platform = %capabilities.platform(),
        logs = %capabilities.logs(),
        activities = %capabilities.activities(),
        signposts = %capabilities.signposts(),
        backend = backend.name(),
        "Selected platform tracer"
    );
    Arc::new(PlatformTracer::new(capabilities, backend))
}
