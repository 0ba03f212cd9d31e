//! Session-scoped token storage.
//!
//! The API hands out one token per authenticated session. Where that token
//! lives is up to the caller: the default [`MemorySession`] keeps it for the
//! lifetime of the client, while applications with external session state
//! (a web framework's session, a file, a cache) implement [`SessionStore`]
//! over their own backing.

/// Storage for the session's auth token. At most one token is live at a
/// time.
pub trait SessionStore: Send {
    fn token(&self) -> Option<String>;
    fn set_token(&mut self, token: String);
    fn clear_token(&mut self);
}

/// In-memory token store, scoped to the owning client.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Option<String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn clear_token(&mut self) {
        self.token = None;
    }
}
