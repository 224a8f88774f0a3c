//! Raw kdebug code encoding for the legacy signpost path.
//!
//! Releases without `kdebug_signpost` still accept the `kdebug_trace`
//! syscall. Its constants are not in older SDK headers, so they are
//! spelled out here.

use super::{SignpostEvent, SignpostPhase};

/// Debug class used for app signposts.
pub const DBG_APPS: u32 = 33;
/// Subclass the signpost tools listen on.
pub const DBG_MACH_CHUD: u32 = 0x0A;

pub const DBG_FUNC_NONE: u32 = 0;
pub const DBG_FUNC_START: u32 = 1;
pub const DBG_FUNC_END: u32 = 2;

/// Syscall number of `kdebug_trace`.
pub const SYS_KDEBUG_TRACE: i32 = 180;

/// Pack a class, subclass and code into a kdebug id.
///
/// Class and subclass keep their low 8 bits, code its low 14; the two low
/// bits of the result are left for the function qualifier.
pub const fn kdbg_code(class: u32, subclass: u32, code: u32) -> u32 {
    ((class & 0xff) << 24) | ((subclass & 0xff) << 16) | ((code & 0x3fff) << 2)
}

/// [`kdbg_code`] in the `DBG_APPS` class.
pub const fn appsdbg_code(subclass: u32, code: u32) -> u32 {
    kdbg_code(DBG_APPS, subclass, code)
}

/// Arguments of a raw `syscall(SYS_kdebug_trace, debugid, a1, a2, a3, a4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyTraceCall {
    pub debugid: u32,
    pub args: [usize; 4],
}

impl LegacyTraceCall {
    /// The color argument, shared with the modern path.
    pub fn color(&self) -> u32 {
        self.args[3] as u32
    }

    /// Phase recovered from the function qualifier bits.
    pub fn phase(&self) -> SignpostPhase {
        match self.debugid & 0x3 {
            DBG_FUNC_START => SignpostPhase::Start,
            DBG_FUNC_END => SignpostPhase::End,
            _ => SignpostPhase::Instant,
        }
    }
}

impl From<SignpostEvent> for LegacyTraceCall {
    fn from(event: SignpostEvent) -> Self {
        Self {
            debugid: appsdbg_code(DBG_MACH_CHUD, event.code) | event.phase.func_qualifier(),
            args: [event.object, 0, 0, event.color() as usize],
        }
    }
}
