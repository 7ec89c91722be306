//! In-memory review repository for tests and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, GameId, ReviewId, Timestamp};
use crate::domain::review::{Review, ReviewDraft};
use crate::domain::user::Username;
use crate::ports::ReviewRepository;

/// In-memory implementation of [`ReviewRepository`].
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. Acceptable for test
/// and development use; production uses the Postgres adapter.
pub struct InMemoryReviewRepository {
    reviews: RwLock<Vec<Review>>,
    next_id: AtomicI64,
}

impl InMemoryReviewRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            reviews: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, DomainError> {
        Ok(self.reviews.read().expect("reviews lock poisoned").clone())
    }

    async fn find_by_game(&self, game_id: GameId) -> Result<Vec<Review>, DomainError> {
        let mut reviews: Vec<Review> = self
            .reviews
            .read()
            .expect("reviews lock poisoned")
            .iter()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect();
        // Newest first, matching the Postgres adapter's ordering
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.as_i64().cmp(&a.id.as_i64())));
        Ok(reviews)
    }

    async fn find_by_game_and_user(
        &self,
        game_id: GameId,
        username: &Username,
    ) -> Result<Option<Review>, DomainError> {
        Ok(self
            .reviews
            .read()
            .expect("reviews lock poisoned")
            .iter()
            .find(|r| r.game_id == game_id && &r.username == username)
            .cloned())
    }

    async fn create(&self, draft: &ReviewDraft) -> Result<Review, DomainError> {
        let review = Review {
            id: ReviewId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst)),
            game_id: draft.game_id,
            username: draft.username.clone(),
            rating: draft.rating,
            comment: draft.comment.clone(),
            created_at: Timestamp::now(),
        };
        self.reviews
            .write()
            .expect("reviews lock poisoned")
            .push(review.clone());
        Ok(review)
    }
}
