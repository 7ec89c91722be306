//! ListReviewsHandler - Query handler for reviews, site-wide or per game.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::domain::review::{Review, ReviewError};
use crate::ports::{GameRepository, ReviewRepository};

/// Query for reviews. With a game id, only that game's reviews; without,
/// every review on the site.
#[derive(Debug, Clone, Default)]
pub struct ListReviewsQuery {
    pub game_id: Option<GameId>,
}

#[derive(Debug, Clone)]
pub struct ListReviewsResult {
    pub reviews: Vec<Review>,
}

pub struct ListReviewsHandler {
    games: Arc<dyn GameRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl ListReviewsHandler {
    pub fn new(games: Arc<dyn GameRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { games, reviews }
    }

    pub async fn handle(&self, query: ListReviewsQuery) -> Result<ListReviewsResult, ReviewError> {
        let reviews = match query.game_id {
            Some(game_id) => {
                self.games
                    .find_by_id(game_id)
                    .await
                    .map_err(|e| ReviewError::infrastructure(e.to_string()))?
                    .ok_or(ReviewError::GameNotFound(game_id))?;
                self.reviews
                    .find_by_game(game_id)
                    .await
                    .map_err(|e| ReviewError::infrastructure(e.to_string()))?
            }
            None => self
                .reviews
                .find_all()
                .await
                .map_err(|e| ReviewError::infrastructure(e.to_string()))?,
        };
        Ok(ListReviewsResult { reviews })
    }
}
