//! Host platform detection and capability resolution.
//!
//! The host's logging, activity and kernel trace facilities appeared in
//! different OS releases. This module answers, once per process, which of
//! them exist and which code path each call should take:
//!
//! - [`OsFamily`] / [`OsVersion`]: what the host is
//! - [`Platform`]: the detected (or configured) family and version
//! - [`Capabilities`]: the resolved [`TracePath`] for every facility
//!
//! # Example
//!
//! ```
//! use rendertrace::platform::{Capabilities, OsFamily, OsVersion, Platform, TracePath};
//!
//! let platform = Platform::new(OsFamily::Ios, Some(OsVersion::new(9, 3, 0)));
//! let caps = Capabilities::resolve(&platform, true);
//!
//! assert_eq!(caps.logs(), TracePath::Modern);
//! assert_eq!(caps.activities(), TracePath::Legacy);
//! assert_eq!(caps.signposts(), TracePath::Legacy);
//! ```

mod capabilities;
mod detect;
mod version;

pub use capabilities::{Capabilities, FacilityMinimums, TracePath};
pub use detect::Platform;
pub use version::{OsFamily, OsVersion, OsVersionParseError};
