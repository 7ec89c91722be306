//! Persistence port for reviews.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GameId};
use crate::domain::review::{Review, ReviewDraft};
use crate::domain::user::Username;

/// Port for reading and writing reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Returns every review.
    async fn find_all(&self) -> Result<Vec<Review>, DomainError>;

    /// Returns the reviews for one game, newest first.
    async fn find_by_game(&self, game_id: GameId) -> Result<Vec<Review>, DomainError>;

    /// Finds a user's review of a game, if present.
    async fn find_by_game_and_user(
        &self,
        game_id: GameId,
        username: &Username,
    ) -> Result<Option<Review>, DomainError>;

    /// Inserts a new review and returns it with its assigned id.
    async fn create(&self, draft: &ReviewDraft) -> Result<Review, DomainError>;
}
