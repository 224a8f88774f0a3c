//! Scope guard for an open activity.

use std::fmt;

/// An open host activity.
///
/// Backends return one from `begin_activity`; the guard consumes it through
/// [`ActivityToken::end`] exactly once.
pub trait ActivityToken {
    /// Close the activity.
    fn end(self: Box<Self>);
}

/// Guard that keeps an activity open for the rest of a lexical scope.
///
/// Dropping the guard closes the activity. An inert guard (facility
/// unavailable) holds nothing and closes nothing. The guard is not `Send`:
/// an activity belongs to the thread that opened it.
#[must_use = "the activity ends as soon as the scope guard is dropped"]
pub struct ActivityScope {
    token: Option<Box<dyn ActivityToken>>,
}

impl ActivityScope {
    pub fn open(token: Box<dyn ActivityToken>) -> Self {
        Self { token: Some(token) }
    }

    /// A guard with no activity behind it.
    pub fn inert() -> Self {
        Self { token: None }
    }

    /// Whether an activity is currently held open by this guard.
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// Close the activity now instead of at the end of the scope.
    pub fn end(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let Some(token) = self.token.take() {
            token.end();
        }
    }
}

impl Drop for ActivityScope {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for ActivityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityScope")
            .field("active", &self.is_active())
            .finish()
    }
}
