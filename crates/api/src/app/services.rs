//! Shared wiring: the catalog store and the session registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use stockdeck_catalog::Catalog;
use stockdeck_core::SessionId;
use stockdeck_session::SessionState;

/// Everything the handlers share: the immutable catalog and the per-session
/// state registry.
pub struct AppServices {
    pub catalog: Catalog,
    pub sessions: SessionRegistry,
}

pub fn build_services() -> AppServices {
    let catalog = Catalog::load();
    tracing::info!(products = catalog.len(), "catalog loaded");

    AppServices {
        catalog,
        sessions: SessionRegistry::default(),
    }
}

/// Registry of live sessions, keyed by session id.
///
/// Isolation is the one concurrency contract here: each id maps to its own
/// `SessionState` behind its own lock, and no handler ever touches a
/// session other than the one its request resolved to.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<SessionId, Arc<Mutex<SessionState>>>>>,
}

impl SessionRegistry {
    /// Fetch the state for a session, creating it on first interaction.
    pub fn resolve(&self, id: SessionId) -> Arc<Mutex<SessionState>> {
        if let Some(existing) = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Arc::clone(existing);
        }

        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            sessions
                .entry(id)
                .or_insert_with(|| Arc::new(Mutex::new(SessionState::new()))),
        )
    }

    /// Drop a session. The next interaction under the same id starts a
    /// fresh state (dashboard page, empty transcript).
    pub fn reset(&self, id: &SessionId) -> bool {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use stockdeck_session::Page;

    use super::*;

    #[test]
    fn resolve_is_stable_per_id() {
        let registry = SessionRegistry::default();
        let id = SessionId::new();

        let first = registry.resolve(id);
        first
            .lock()
            .unwrap()
            .set_page(Page::Chat);

        let second = registry.resolve(id);
        assert_eq!(second.lock().unwrap().page(), Page::Chat);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn sessions_are_isolated_per_id() {
        let registry = SessionRegistry::default();
        let a = SessionId::new();
        let b = SessionId::new();

        registry.resolve(a).lock().unwrap().set_page(Page::Orders);

        assert_eq!(registry.resolve(b).lock().unwrap().page(), Page::Dashboard);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reset_drops_the_state() {
        let registry = SessionRegistry::default();
        let id = SessionId::new();

        registry.resolve(id).lock().unwrap().set_page(Page::Settings);
        assert!(registry.reset(&id));
        assert!(!registry.reset(&id));

        assert_eq!(registry.resolve(id).lock().unwrap().page(), Page::Dashboard);
    }
}
