//! OS family and version types.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operating system family the process runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    /// iOS / iPadOS
    Ios,
    /// macOS
    MacOs,
    /// Any host without Apple's unified logging (Linux, Windows, ...)
    Other,
}

impl OsFamily {
    /// Family of the compilation target.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            OsFamily::Ios
        } else if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else {
            OsFamily::Other
        }
    }

    /// Lowercase name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Ios => "ios",
            OsFamily::MacOs => "macos",
            OsFamily::Other => "other",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = OsVersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(OsFamily::Ios),
            "macos" | "osx" => Ok(OsFamily::MacOs),
            "other" => Ok(OsFamily::Other),
            _ => Err(OsVersionParseError::UnknownFamily(s.to_string())),
        }
    }
}

/// Errors from parsing a family name or a dotted version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsVersionParseError {
    /// The string was empty.
    #[error("empty version string")]
    Empty,

    /// A component was not a non-negative integer.
    #[error("invalid version component '{component}' in '{input}'")]
    InvalidComponent { input: String, component: String },

    /// More than three components.
    #[error("too many version components in '{0}' (expected at most major.minor.patch)")]
    TooManyComponents(String),

    /// Unrecognised OS family name.
    #[error("unknown OS family '{0}' (expected ios, macos or other)")]
    UnknownFamily(String),
}

/// A `major.minor.patch` OS release.
///
/// Ordering is lexicographic over the three components, so
/// `10.0.0 > 9.3.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// True when `self` is the same release as `min` or newer.
    pub fn at_least(&self, min: OsVersion) -> bool {
        *self >= min
    }

    /// Convert a Darwin kernel major release into the marketing version
    /// of the given family.
    ///
    /// Returns `None` for releases that predate the family or for
    /// non-Apple families.
    pub fn from_darwin_major(family: OsFamily, darwin: u32) -> Option<Self> {
        match family {
            // Darwin 20 is macOS 11; before that macOS was 10.(darwin - 4)
            OsFamily::MacOs if darwin >= 20 => Some(Self::new(darwin - 9, 0, 0)),
            OsFamily::MacOs if darwin >= 5 => Some(Self::new(10, darwin - 4, 0)),
            OsFamily::Ios if darwin >= 10 => Some(Self::new(darwin - 6, 0, 0)),
            _ => None,
        }
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for OsVersion {
    type Err = OsVersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(OsVersionParseError::Empty);
        }

        let mut parts = [0u32; 3];
        for (i, component) in input.split('.').enumerate() {
            if i >= parts.len() {
                return Err(OsVersionParseError::TooManyComponents(input.to_string()));
            }
            parts[i] = component
                .parse()
                .map_err(|_| OsVersionParseError::InvalidComponent {
                    input: input.to_string(),
                    component: component.to_string(),
                })?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        assert_eq!("10.3.1".parse::<OsVersion>(), Ok(OsVersion::new(10, 3, 1)));
    }

    #[test]
    fn test_parse_partial_versions() {
        assert_eq!("10".parse::<OsVersion>(), Ok(OsVersion::new(10, 0, 0)));
        assert_eq!("10.12".parse::<OsVersion>(), Ok(OsVersion::new(10, 12, 0)));
        assert_eq!(" 9.3 ".parse::<OsVersion>(), Ok(OsVersion::new(9, 3, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<OsVersion>(), Err(OsVersionParseError::Empty));
        assert!(matches!(
            "10.x".parse::<OsVersion>(),
            Err(OsVersionParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            "1.2.3.4".parse::<OsVersion>(),
            Err(OsVersionParseError::TooManyComponents(_))
        ));
        assert!("10..1".parse::<OsVersion>().is_err());
    }

    #[test]
    fn test_version_ordering() {
        assert!(OsVersion::new(10, 0, 0) > OsVersion::new(9, 3, 5));
        assert!(OsVersion::new(10, 12, 0) > OsVersion::new(10, 11, 6));
        assert!(OsVersion::new(10, 12, 0).at_least(OsVersion::new(10, 12, 0)));
        assert!(!OsVersion::new(10, 11, 6).at_least(OsVersion::new(10, 12, 0)));
    }

    #[test]
    fn test_darwin_conversion() {
        assert_eq!(
            OsVersion::from_darwin_major(OsFamily::MacOs, 16),
            Some(OsVersion::new(10, 12, 0))
        );
        assert_eq!(
            OsVersion::from_darwin_major(OsFamily::MacOs, 23),
            Some(OsVersion::new(14, 0, 0))
        );
        assert_eq!(
            OsVersion::from_darwin_major(OsFamily::Ios, 15),
            Some(OsVersion::new(9, 0, 0))
        );
        assert_eq!(OsVersion::from_darwin_major(OsFamily::Other, 16), None);
        assert_eq!(OsVersion::from_darwin_major(OsFamily::Ios, 3), None);
    }

    #[test]
    fn test_family_parse_and_display() {
        assert_eq!("iOS".parse::<OsFamily>(), Ok(OsFamily::Ios));
        assert_eq!("macos".parse::<OsFamily>(), Ok(OsFamily::MacOs));
        assert_eq!("other".parse::<OsFamily>(), Ok(OsFamily::Other));
        assert!("beos".parse::<OsFamily>().is_err());
        assert_eq!(OsFamily::MacOs.to_string(), "macos");
    }
}
