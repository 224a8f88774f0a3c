//! Activity creation flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Behavior flags for a new activity, mirroring the host's activity flag
/// bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActivityFlags(u32);

impl ActivityFlags {
    /// Nest under the current activity
    pub const DEFAULT: Self = Self(0);
    /// Start a new top-level activity instead of nesting
    pub const DETACHED: Self = Self(0x1);
    /// Only create the activity when none is currently active
    pub const IF_NONE_PRESENT: Self = Self(0x2);

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ActivityFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ActivityFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for ActivityFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Self::DETACHED) {
            names.push("DETACHED");
        }
        if self.contains(Self::IF_NONE_PRESENT) {
            names.push("IF_NONE_PRESENT");
        }
        if names.is_empty() {
            names.push("DEFAULT");
        }
        write!(f, "ActivityFlags({})", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(ActivityFlags::default(), ActivityFlags::DEFAULT);
        assert_eq!(ActivityFlags::DEFAULT.bits(), 0);
    }

    #[test]
    fn test_combine_and_contains() {
        let mut flags = ActivityFlags::DETACHED;
        assert!(flags.contains(ActivityFlags::DETACHED));
        assert!(!flags.contains(ActivityFlags::IF_NONE_PRESENT));

        flags |= ActivityFlags::IF_NONE_PRESENT;
        assert_eq!(flags.bits(), 0x3);
        assert_eq!(
            flags,
            ActivityFlags::DETACHED | ActivityFlags::IF_NONE_PRESENT
        );
    }

    #[test]
    fn test_debug_names() {
        assert_eq!(
            format!("{:?}", ActivityFlags::DEFAULT),
            "ActivityFlags(DEFAULT)"
        );
        assert_eq!(
            format!("{:?}", ActivityFlags::DETACHED | ActivityFlags::IF_NONE_PRESENT),
            "ActivityFlags(DETACHED | IF_NONE_PRESENT)"
        );
    }
}
