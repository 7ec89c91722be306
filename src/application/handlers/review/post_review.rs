//! PostReviewHandler - Command handler for posting a game review.

use std::sync::Arc;

use crate::domain::foundation::{GameId, SessionId};
use crate::domain::review::{Review, ReviewDraft, ReviewError};
use crate::ports::{GameRepository, ReviewRepository, SessionStore};

/// Command to post a review for a game.
#[derive(Debug, Clone)]
pub struct PostReviewCommand {
    pub game_id: GameId,
    pub session_id: Option<SessionId>,
    pub rating: i16,
    pub comment: String,
}

/// Result of a successful post.
#[derive(Debug, Clone)]
pub struct PostReviewResult {
    pub review: Review,
}

/// Handler enforcing the one-review-per-user-per-game rule.
pub struct PostReviewHandler {
    games: Arc<dyn GameRepository>,
    reviews: Arc<dyn ReviewRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl PostReviewHandler {
    pub fn new(
        games: Arc<dyn GameRepository>,
        reviews: Arc<dyn ReviewRepository>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            games,
            reviews,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: PostReviewCommand) -> Result<PostReviewResult, ReviewError> {
        let session = match cmd.session_id {
            Some(id) => self
                .sessions
                .load(id)
                .await
                .map_err(|e| ReviewError::infrastructure(e.to_string()))?
                .unwrap_or_default(),
            None => Default::default(),
        };
        let username = session.username.ok_or(ReviewError::SignInRequired)?;

        self.games
            .find_by_id(cmd.game_id)
            .await
            .map_err(|e| ReviewError::infrastructure(e.to_string()))?
            .ok_or(ReviewError::GameNotFound(cmd.game_id))?;

        let draft = ReviewDraft::new(cmd.game_id, username.clone(), cmd.rating, cmd.comment)?;

        if self
            .reviews
            .find_by_game_and_user(cmd.game_id, &username)
            .await
            .map_err(|e| ReviewError::infrastructure(e.to_string()))?
            .is_some()
        {
            return Err(ReviewError::AlreadyReviewed(cmd.game_id));
        }

        let review = self
            .reviews
            .create(&draft)
            .await
            .map_err(|e| ReviewError::infrastructure(e.to_string()))?;

        tracing::info!(
            game_id = %cmd.game_id,
            username = %review.username,
            rating = review.rating.value(),
            "review posted"
        );
        Ok(PostReviewResult { review })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryGameRepository, InMemoryReviewRepository, InMemorySessionStore,
    };
    use crate::domain::catalog::GameDraft;
    use crate::domain::session::SessionData;
    use crate::domain::user::Username;

    struct Fixture {
        handler: PostReviewHandler,
        games: Arc<InMemoryGameRepository>,
        sessions: Arc<InMemorySessionStore>,
    }

    fn fixture() -> Fixture {
        let games = Arc::new(InMemoryGameRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        Fixture {
            handler: PostReviewHandler::new(games.clone(), reviews, sessions.clone()),
            games,
            sessions,
        }
    }

    async fn seed(fx: &Fixture) -> (GameId, SessionId) {
        let game = fx
            .games
            .create(&GameDraft::new("Some Game", None, None, None, None, None).unwrap())
            .await
            .unwrap();
        let session_id = fx
            .sessions
            .create(SessionData::for_user(Username::new("alice").unwrap()))
            .await
            .unwrap();
        (game.id, session_id)
    }

    #[tokio::test]
    async fn requires_sign_in() {
        let fx = fixture();
        let (game_id, _) = seed(&fx).await;

        let err = fx
            .handler
            .handle(PostReviewCommand {
                game_id,
                session_id: None,
                rating: 4,
                comment: "nice".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, ReviewError::SignInRequired);
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let fx = fixture();
        let (_, session_id) = seed(&fx).await;

        let err = fx
            .handler
            .handle(PostReviewCommand {
                game_id: GameId::from_i64(404),
                session_id: Some(session_id),
                rating: 4,
                comment: "nice".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::GameNotFound(_)));
    }

    #[tokio::test]
    async fn rejects_invalid_rating() {
        let fx = fixture();
        let (game_id, session_id) = seed(&fx).await;

        let err = fx
            .handler
            .handle(PostReviewCommand {
                game_id,
                session_id: Some(session_id),
                rating: 6,
                comment: "too good".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn posts_a_review() {
        let fx = fixture();
        let (game_id, session_id) = seed(&fx).await;

        let result = fx
            .handler
            .handle(PostReviewCommand {
                game_id,
                session_id: Some(session_id),
                rating: 5,
                comment: "  Masterpiece  ".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.review.comment, "Masterpiece");
        assert_eq!(result.review.rating.value(), 5);
    }

    #[tokio::test]
    async fn second_review_for_same_game_is_rejected() {
        let fx = fixture();
        let (game_id, session_id) = seed(&fx).await;
        let cmd = PostReviewCommand {
            game_id,
            session_id: Some(session_id),
            rating: 3,
            comment: "fine".to_string(),
        };

        fx.handler.handle(cmd.clone()).await.unwrap();
        let err = fx.handler.handle(cmd).await.unwrap_err();
        assert_eq!(err, ReviewError::AlreadyReviewed(game_id));
    }
}
