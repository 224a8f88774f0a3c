//! Profiling signpost model.
//!
//! A signpost is a kernel trace marker: an instant, or the start or end of
//! an interval. Performance tools group signposts by `code` and pair
//! start/end markers by `object`. Every signpost also carries a color,
//! `code % 4`, in its fourth argument. The value is identical on the modern
//! and legacy paths so traces from old and new releases line up.

mod encoding;

pub use encoding::{
    appsdbg_code, kdbg_code, LegacyTraceCall, DBG_APPS, DBG_FUNC_END, DBG_FUNC_NONE,
    DBG_FUNC_START, DBG_MACH_CHUD, SYS_KDEBUG_TRACE,
};

/// Which kind of marker a signpost is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignpostPhase {
    /// A point event
    Instant,
    /// Opens an interval
    Start,
    /// Closes an interval
    End,
}

impl SignpostPhase {
    /// Function qualifier OR-ed into a raw kdebug id.
    pub fn func_qualifier(&self) -> u32 {
        match self {
            SignpostPhase::Instant => DBG_FUNC_NONE,
            SignpostPhase::Start => DBG_FUNC_START,
            SignpostPhase::End => DBG_FUNC_END,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignpostPhase::Instant => "instant",
            SignpostPhase::Start => "start",
            SignpostPhase::End => "end",
        }
    }
}

/// Color (sub-classification) of a signpost code.
#[inline]
pub fn signpost_color(code: u32) -> u32 {
    code % 4
}

/// A single signpost emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignpostEvent {
    pub phase: SignpostPhase,
    pub code: u32,
    /// Interval identifier pairing a start with its end; 0 for instants.
    pub object: usize,
}

impl SignpostEvent {
    pub fn instant(code: u32) -> Self {
        Self {
            phase: SignpostPhase::Instant,
            code,
            object: 0,
        }
    }

    pub fn start(code: u32, object: usize) -> Self {
        Self {
            phase: SignpostPhase::Start,
            code,
            object,
        }
    }

    pub fn end(code: u32, object: usize) -> Self {
        Self {
            phase: SignpostPhase::End,
            code,
            object,
        }
    }

    pub fn color(&self) -> u32 {
        signpost_color(self.code)
    }

    /// Arguments passed to `kdebug_signpost*` after the code.
    pub fn modern_args(&self) -> [usize; 4] {
        [self.object, 0, 0, self.color() as usize]
    }

    /// The equivalent raw `kdebug_trace` call for releases without
    /// `kdebug_signpost`.
    pub fn to_legacy(&self) -> LegacyTraceCall {
        LegacyTraceCall::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_code_mod_four() {
        for (code, color) in [(0, 0), (1, 1), (2, 2), (3, 3), (4, 0), (5, 1), (1000, 0)] {
            assert_eq!(signpost_color(code), color);
        }
    }

    #[test]
    fn test_constructors() {
        let e = SignpostEvent::instant(7);
        assert_eq!(e.phase, SignpostPhase::Instant);
        assert_eq!(e.object, 0);
        assert_eq!(e.color(), 3);

        let s = SignpostEvent::start(5, 0xdead);
        assert_eq!(s.phase, SignpostPhase::Start);
        assert_eq!(s.object, 0xdead);

        let e = SignpostEvent::end(5, 0xdead);
        assert_eq!(e.phase, SignpostPhase::End);
    }

    #[test]
    fn test_modern_args_carry_object_and_color() {
        let e = SignpostEvent::start(6, 42);
        assert_eq!(e.modern_args(), [42, 0, 0, 2]);
    }

    #[test]
    fn test_func_qualifiers() {
        assert_eq!(SignpostPhase::Instant.func_qualifier(), 0);
        assert_eq!(SignpostPhase::Start.func_qualifier(), 1);
        assert_eq!(SignpostPhase::End.func_qualifier(), 2);
    }
}
