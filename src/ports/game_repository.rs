//! Persistence port for the game catalog.

use async_trait::async_trait;

use crate::domain::catalog::{Game, GameDraft};
use crate::domain::foundation::{DomainError, GameId};

/// Port for reading and writing catalog games.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Returns every game in the catalog.
    async fn find_all(&self) -> Result<Vec<Game>, DomainError>;

    /// Finds a game by id.
    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, DomainError>;

    /// Inserts a new game and returns it with its assigned id.
    async fn create(&self, draft: &GameDraft) -> Result<Game, DomainError>;
}
