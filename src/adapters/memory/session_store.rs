//! In-memory session store for tests and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::SessionData;
use crate::ports::SessionStore;

/// In-memory implementation of [`SessionStore`].
///
/// Sessions never expire here; expiry belongs to a production store.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. Acceptable for test
/// and development use.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionData>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of live sessions (test helper).
    pub fn session_count(&self) -> usize {
        self.sessions.read().expect("sessions lock poisoned").len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, data: SessionData) -> Result<SessionId, DomainError> {
        let id = SessionId::new();
        self.sessions
            .write()
            .expect("sessions lock poisoned")
            .insert(id, data);
        Ok(id)
    }

    async fn load(&self, id: SessionId) -> Result<Option<SessionData>, DomainError> {
        Ok(self
            .sessions
            .read()
            .expect("sessions lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn save(&self, id: SessionId, data: SessionData) -> Result<(), DomainError> {
        self.sessions
            .write()
            .expect("sessions lock poisoned")
            .insert(id, data);
        Ok(())
    }

    async fn destroy(&self, id: SessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .expect("sessions lock poisoned")
            .remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Username;

    #[tokio::test]
    async fn created_session_loads_back() {
        let store = InMemorySessionStore::new();
        let data = SessionData::for_user(Username::new("alice").unwrap());
        let id = store.create(data.clone()).await.unwrap();

        assert_eq!(store.load(id).await.unwrap(), Some(data));
    }

    #[tokio::test]
    async fn unknown_session_loads_none() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load(SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_replaces_session_data() {
        let store = InMemorySessionStore::new();
        let id = store.create(SessionData::default()).await.unwrap();

        let mut data = SessionData::default();
        data.plan_tier = Some("Retro".to_string());
        store.save(id, data.clone()).await.unwrap();

        assert_eq!(store.load(id).await.unwrap(), Some(data));
    }

    #[tokio::test]
    async fn destroy_removes_the_session() {
        let store = InMemorySessionStore::new();
        let id = store.create(SessionData::default()).await.unwrap();
        store.destroy(id).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), None);
        // Destroying again is a no-op
        store.destroy(id).await.unwrap();
    }
}
