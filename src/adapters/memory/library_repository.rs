//! In-memory library repository for tests and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, GameId, LibraryEntryId, Timestamp};
use crate::domain::library::LibraryEntry;
use crate::domain::user::Username;
use crate::ports::LibraryRepository;

/// In-memory implementation of [`LibraryRepository`].
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. Acceptable for test
/// and development use; production uses the Postgres adapter.
pub struct InMemoryLibraryRepository {
    entries: RwLock<Vec<LibraryEntry>>,
    next_id: AtomicI64,
}

impl InMemoryLibraryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryLibraryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryRepository for InMemoryLibraryRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Vec<LibraryEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .expect("entries lock poisoned")
            .iter()
            .filter(|e| &e.username == username)
            .cloned()
            .collect())
    }

    async fn find_entry(
        &self,
        username: &Username,
        game_id: GameId,
    ) -> Result<Option<LibraryEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .expect("entries lock poisoned")
            .iter()
            .find(|e| &e.username == username && e.game_id == game_id)
            .cloned())
    }

    async fn create(
        &self,
        username: &Username,
        game_id: GameId,
    ) -> Result<LibraryEntry, DomainError> {
        let entry = LibraryEntry {
            id: LibraryEntryId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst)),
            username: username.clone(),
            game_id,
            added_at: Timestamp::now(),
        };
        self.entries
            .write()
            .expect("entries lock poisoned")
            .push(entry.clone());
        Ok(entry)
    }
}
