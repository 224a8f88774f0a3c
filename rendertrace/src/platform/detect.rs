//! Runtime detection of the host OS release.

use std::fmt;

use super::version::{OsFamily, OsVersion};

/// The OS family and release the process is running on.
///
/// `version` is `None` when the release could not be determined, or when
/// the family has no notion of a release relevant to tracing (`Other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub family: OsFamily,
    pub version: Option<OsVersion>,
}

impl Platform {
    pub fn new(family: OsFamily, version: Option<OsVersion>) -> Self {
        Self { family, version }
    }

    /// Detect the running platform.
    ///
    /// # Platform Support
    ///
    /// - **macOS / iOS**: reads `kern.osproductversion`, falling back to the
    ///   Darwin release in `kern.osrelease` on kernels that lack it
    /// - **Other platforms**: family `Other`, no version
    pub fn detect() -> Self {
        let family = OsFamily::current();
        let version = detect_version(family);
        tracing::debug!(family = %family, version = ?version, "Detected host platform");
        Self { family, version }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(v) => write!(f, "{} {}", self.family, v),
            None => write!(f, "{} (unknown version)", self.family),
        }
    }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn detect_version(family: OsFamily) -> Option<OsVersion> {
    if let Some(v) = sysctl_string(c"kern.osproductversion").and_then(|s| s.parse().ok()) {
        return Some(v);
    }

    // Format: "16.7.0"; only the Darwin major is meaningful here
    let release = sysctl_string(c"kern.osrelease")?;
    let darwin_major = release.split('.').next()?.parse().ok()?;
    OsVersion::from_darwin_major(family, darwin_major)
}

#[cfg(not(any(target_os = "macos", target_os = "ios")))]
fn detect_version(_family: OsFamily) -> Option<OsVersion> {
    None
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn sysctl_string(name: &std::ffi::CStr) -> Option<String> {
    let mut buf = [0u8; 64];
    let mut len: libc::size_t = buf.len();

    // SAFETY: `name` is NUL-terminated, `buf` is valid for `len` bytes and
    // the kernel writes at most `len` bytes, updating `len` in place.
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            buf.as_mut_ptr().cast::<libc::c_void>(),
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return None;
    }

    let bytes = &buf[..len.min(buf.len())];
    let value = match std::ffi::CStr::from_bytes_until_nul(bytes) {
        Ok(c) => c.to_str().ok()?.to_string(),
        Err(_) => std::str::from_utf8(bytes).ok()?.to_string(),
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reports_compile_target_family() {
        let platform = Platform::detect();
        assert_eq!(platform.family, OsFamily::current());
    }

    #[cfg(not(any(target_os = "macos", target_os = "ios")))]
    #[test]
    fn test_detect_non_apple_has_no_version() {
        assert_eq!(Platform::detect().version, None);
    }

    #[test]
    fn test_display() {
        let p = Platform::new(OsFamily::Ios, Some(OsVersion::new(10, 3, 1)));
        assert_eq!(p.to_string(), "ios 10.3.1");

        let p = Platform::new(OsFamily::Other, None);
        assert_eq!(p.to_string(), "other (unknown version)");
    }
}
