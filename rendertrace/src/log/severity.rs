//! Record severity.

use std::fmt;

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Development-time detail, usually not persisted by the host
    Debug,
    /// Helpful but non-essential information
    Info,
    /// The host's default log type
    Default,
    /// A recoverable failure
    Error,
    /// A bug or unrecoverable condition in the framework
    Fault,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Default => "default",
            Severity::Error => "error",
            Severity::Fault => "fault",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Default);
        assert!(Severity::Default < Severity::Error);
        assert!(Severity::Error < Severity::Fault);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Fault.to_string(), "fault");
        assert_eq!(Severity::Default.to_string(), "default");
    }
}
