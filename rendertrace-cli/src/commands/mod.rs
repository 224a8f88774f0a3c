//! CLI command implementations.
//!
//! - [`common`] - Config loading shared by every command
//! - [`config`] - Configuration management (path, show, init)
//! - [`emit`] - Sample emission through the selected tracer
//! - [`probe`] - Platform and path report

pub mod common;
pub mod config;
pub mod emit;
pub mod probe;
