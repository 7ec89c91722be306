//! Persistence port for user libraries.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GameId};
use crate::domain::library::LibraryEntry;
use crate::domain::user::Username;

/// Port for reading and writing library entries.
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// Returns a user's library entries, oldest first.
    async fn find_by_username(&self, username: &Username) -> Result<Vec<LibraryEntry>, DomainError>;

    /// Finds the entry for one user and game, if present.
    async fn find_entry(
        &self,
        username: &Username,
        game_id: GameId,
    ) -> Result<Option<LibraryEntry>, DomainError>;

    /// Inserts a new entry and returns it with its assigned id.
    async fn create(&self, username: &Username, game_id: GameId)
        -> Result<LibraryEntry, DomainError>;
}
