//! GetGameDetailHandler - Query handler for the game detail page.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Game};
use crate::domain::foundation::{GameId, SessionId};
use crate::domain::plan::PlanTier;
use crate::domain::review::Review;
use crate::domain::session::SessionData;
use crate::ports::{GameRepository, LibraryRepository, ReviewRepository, SessionStore};

/// Query for one game's detail page.
#[derive(Debug, Clone)]
pub struct GetGameDetailQuery {
    pub game_id: GameId,
    /// Session of the requesting user, if any.
    pub session_id: Option<SessionId>,
}

/// Game detail page data.
#[derive(Debug, Clone)]
pub struct GameDetailResult {
    pub game: Game,
    /// Reviews, newest first.
    pub reviews: Vec<Review>,
    /// Raw tier marker on the game record, echoed for display.
    pub required_tier: Option<String>,
    /// The viewer's normalized current tier.
    pub plan_tier: PlanTier,
    /// Whether the viewer's plan grants access to this title.
    pub can_access: bool,
    /// Whether the signed-in viewer already has this game in their library.
    pub in_library: bool,
    /// Whether the signed-in viewer already reviewed this game.
    pub already_reviewed: bool,
}

/// Handler for the game detail page.
///
/// The access decision routes through the plan tier policy: the game's raw
/// tier marker and the session's raw plan string are normalized and compared
/// by weight. A marker that fails to normalize gates nothing.
pub struct GetGameDetailHandler {
    games: Arc<dyn GameRepository>,
    reviews: Arc<dyn ReviewRepository>,
    library: Arc<dyn LibraryRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl GetGameDetailHandler {
    pub fn new(
        games: Arc<dyn GameRepository>,
        reviews: Arc<dyn ReviewRepository>,
        library: Arc<dyn LibraryRepository>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            games,
            reviews,
            library,
            sessions,
        }
    }

    pub async fn handle(&self, query: GetGameDetailQuery) -> Result<GameDetailResult, CatalogError> {
        let game = self
            .games
            .find_by_id(query.game_id)
            .await
            .map_err(|e| CatalogError::infrastructure(e.to_string()))?
            .ok_or(CatalogError::NotFound(query.game_id))?;

        let reviews = self
            .reviews
            .find_by_game(query.game_id)
            .await
            .map_err(|e| CatalogError::infrastructure(e.to_string()))?;

        let session = match query.session_id {
            Some(id) => self
                .sessions
                .load(id)
                .await
                .map_err(|e| CatalogError::infrastructure(e.to_string()))?
                .unwrap_or_default(),
            None => SessionData::default(),
        };

        let plan_tier = session.display_tier();
        let can_access = PlanTier::can_access(game.required_tier(), Some(plan_tier.label()));

        let (in_library, already_reviewed) = match &session.username {
            Some(username) => {
                let in_library = self
                    .library
                    .find_entry(username, query.game_id)
                    .await
                    .map_err(|e| CatalogError::infrastructure(e.to_string()))?
                    .is_some();
                let already_reviewed = self
                    .reviews
                    .find_by_game_and_user(query.game_id, username)
                    .await
                    .map_err(|e| CatalogError::infrastructure(e.to_string()))?
                    .is_some();
                (in_library, already_reviewed)
            }
            None => (false, false),
        };

        Ok(GameDetailResult {
            required_tier: game.subscription_tier.clone(),
            game,
            reviews,
            plan_tier,
            can_access,
            in_library,
            already_reviewed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryGameRepository, InMemoryLibraryRepository, InMemoryReviewRepository,
        InMemorySessionStore,
    };
    use crate::domain::catalog::GameDraft;
    use crate::domain::user::Username;

    struct Fixture {
        handler: GetGameDetailHandler,
        games: Arc<InMemoryGameRepository>,
        library: Arc<InMemoryLibraryRepository>,
        reviews: Arc<InMemoryReviewRepository>,
        sessions: Arc<InMemorySessionStore>,
    }

    fn fixture() -> Fixture {
        let games = Arc::new(InMemoryGameRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let library = Arc::new(InMemoryLibraryRepository::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        Fixture {
            handler: GetGameDetailHandler::new(
                games.clone(),
                reviews.clone(),
                library.clone(),
                sessions.clone(),
            ),
            games,
            library,
            reviews,
            sessions,
        }
    }

    async fn add_game(fx: &Fixture, title: &str, tier: Option<&str>) -> GameId {
        fx.games
            .create(
                &GameDraft::new(title, None, None, None, None, tier.map(String::from)).unwrap(),
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let fx = fixture();
        let err = fx
            .handler
            .handle(GetGameDetailQuery {
                game_id: GameId::from_i64(99),
                session_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn anonymous_viewer_defaults_to_free_tier() {
        let fx = fixture();
        let id = add_game(&fx, "Pixel Quest", Some("retro")).await;

        let result = fx
            .handler
            .handle(GetGameDetailQuery {
                game_id: id,
                session_id: None,
            })
            .await
            .unwrap();
        assert_eq!(result.plan_tier, PlanTier::Free);
        assert!(!result.can_access);
        assert!(!result.in_library);
        assert!(!result.already_reviewed);
    }

    #[tokio::test]
    async fn ungated_game_is_accessible_to_anyone() {
        let fx = fixture();
        let id = add_game(&fx, "Free Runner", None).await;

        let result = fx
            .handler
            .handle(GetGameDetailQuery {
                game_id: id,
                session_id: None,
            })
            .await
            .unwrap();
        assert!(result.can_access);
        assert_eq!(result.required_tier, None);
    }

    #[tokio::test]
    async fn legacy_tier_strings_normalize_on_both_sides() {
        let fx = fixture();
        // "ultimate" is a legacy alias for AAA
        let id = add_game(&fx, "Mega Title", Some("ultimate")).await;

        let mut session = SessionData::for_user(Username::new("alice").unwrap());
        session.plan_tier = Some("indie pack".to_string());
        let session_id = fx.sessions.create(session).await.unwrap();

        let result = fx
            .handler
            .handle(GetGameDetailQuery {
                game_id: id,
                session_id: Some(session_id),
            })
            .await
            .unwrap();
        assert_eq!(result.plan_tier, PlanTier::Indie);
        assert!(!result.can_access);
        assert_eq!(result.required_tier.as_deref(), Some("ultimate"));
    }

    #[tokio::test]
    async fn flags_reflect_library_and_review_state() {
        let fx = fixture();
        let id = add_game(&fx, "Pixel Quest", None).await;
        let alice = Username::new("alice").unwrap();

        fx.library.create(&alice, id).await.unwrap();
        fx.reviews
            .create(
                &crate::domain::review::ReviewDraft::new(id, alice.clone(), 5, "Lovely").unwrap(),
            )
            .await
            .unwrap();

        let session_id = fx
            .sessions
            .create(SessionData::for_user(alice))
            .await
            .unwrap();

        let result = fx
            .handler
            .handle(GetGameDetailQuery {
                game_id: id,
                session_id: Some(session_id),
            })
            .await
            .unwrap();
        assert!(result.in_library);
        assert!(result.already_reviewed);
        assert_eq!(result.reviews.len(), 1);
    }
}
