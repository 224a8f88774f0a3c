//! Activity scopes.
//!
//! An activity is a host-tracked span of execution that correlates the log
//! and trace records emitted inside it. [`ActivityScope`] ties one activity
//! to a lexical scope: it is opened when the guard is created and closed
//! exactly once when the guard goes away, whether the scope returns
//! normally, returns early or unwinds.

mod flags;
mod scope;

pub use flags::ActivityFlags;
pub use scope::{ActivityScope, ActivityToken};
