//! Per-request session context.

use std::sync::{Arc, Mutex, PoisonError};

use stockdeck_core::SessionId;
use stockdeck_session::SessionState;

/// The session a request runs under, resolved by the session middleware
/// and inserted as a request extension.
///
/// State access goes through [`SessionContext::with_state`], so a session
/// is only ever touched by the render cycle that owns it. Two requests for
/// the same session serialize on the lock; requests for different sessions
/// never share anything.
#[derive(Clone)]
pub struct SessionContext {
    id: SessionId,
    state: Arc<Mutex<SessionState>>,
}

impl SessionContext {
    pub fn new(id: SessionId, state: Arc<Mutex<SessionState>>) -> Self {
        Self { id, state }
    }

    pub fn session_id(&self) -> SessionId {
        self.id
    }

    /// Run one render cycle against the session's state.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
