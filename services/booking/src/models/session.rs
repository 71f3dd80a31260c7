//! Session model
//!
//! A session is an explicit value owned by the caller (one per logical
//! connection), not hidden state inside the facade. It holds at most one
//! authenticated identity and is never persisted.

use super::user::User;

/// Process-local session: Anonymous or Authenticated(identity)
#[derive(Debug, Clone, Default)]
pub struct Session {
    identity: Option<User>,
}

impl Session {
    /// Create a new anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// The authenticated identity, if any
    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    /// Whether the session holds an authenticated identity
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Transition to Authenticated(user)
    pub fn authenticate(&mut self, user: User) {
        self.identity = Some(user);
    }

    /// Transition to Anonymous; a no-op when already anonymous
    pub fn clear(&mut self) {
        self.identity = None;
    }
}
