//! Tracer abstraction layer.
//!
//! Framework code talks to a [`Tracer`]; which implementation it gets is
//! decided once, from the host's [`Capabilities`](crate::platform::Capabilities).
//!
//! # Architecture
//!
//! - `Tracer` trait: the interface all call sites use
//! - `PlatformTracer`: forwards to a [`TraceBackend`](crate::backend::TraceBackend)
//!   along the path resolved for each facility
//! - `NullTracer`: discards everything
//! - [`select_tracer`]: picks one from resolved capabilities
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use rendertrace::log::LogHandle;
//! use rendertrace::tracer::{NullTracer, Tracer};
//! use rendertrace::{activity_scope, log_info};
//!
//! fn layout(tracer: &dyn Tracer, log: &LogHandle) {
//!     activity_scope!(tracer, "Layout pass");
//!     log_info!(tracer, log, "laying out {} nodes", 3);
//! }
//!
//! let tracer: Arc<dyn Tracer> = Arc::new(NullTracer);
//! layout(tracer.as_ref(), &LogHandle::new("com.example", "Layout"));
//! ```

mod null;
mod platform;
mod select;
mod r#trait;

pub use null::NullTracer;
pub use platform::PlatformTracer;
pub use r#trait::Tracer;
pub use select::select_tracer;
